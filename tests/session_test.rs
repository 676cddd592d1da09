// ==========================================
// AppSession 集成测试
// ==========================================
// 测试目标: 界面入口的 报告-不崩溃 语义
// ==========================================


use h2_energy_eval::app::AppSession;
use h2_energy_eval::binding::IndicatorForm;
use h2_energy_eval::config::{config_keys, ConfigManager};
use h2_energy_eval::store::INDICATOR_SYSTEM_FILE;
use std::fs;
use tempfile::TempDir;
use test_helpers::sample_project_form;

fn test_session() -> AppSession {
    AppSession::new(ConfigManager::in_memory())
}

#[test]
fn test_cancelled_new_project_is_noop() {
    let mut session = test_session();

    assert!(session.new_project(None).is_none());
    assert!(session.current_project_path().is_none());
    assert!(session.last_message().is_none());
}

#[test]
fn test_new_save_open_cycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = test_session();

    let project_path = session
        .new_project(Some(temp_dir.path()))
        .expect("Failed to create project");
    assert!(session.take_message().is_some());

    assert!(session.save(
        &sample_project_form(),
        &IndicatorForm::with_selected(["npv"])
    ));

    let mut other = test_session();
    assert!(other.open_project(&project_path));
    assert_eq!(other.project_form(), session.project_form());
    assert_eq!(other.indicator_form().selected_indicators, vec!["npv"]);
}

#[test]
fn test_save_without_project_reports_failure() {
    let mut session = test_session();

    assert!(!session.save(&sample_project_form(), &IndicatorForm::default()));
    assert!(session.take_message().is_some());
    assert!(session.take_message().is_none());
}

#[test]
fn test_open_invalid_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = test_session();
    let project_path = session
        .new_project(Some(temp_dir.path()))
        .expect("Failed to create project");
    let before = session.project_form();

    let empty = temp_dir.path().join("empty");
    fs::create_dir_all(&empty).expect("create dir");
    assert!(!session.open_project(&empty));

    fs::remove_file(project_path.join(INDICATOR_SYSTEM_FILE)).expect("remove file");
    assert!(!session.open_project(&project_path));

    // 失败不改变已加载的项目
    assert_eq!(session.current_project_path(), Some(project_path.as_path()));
    assert_eq!(session.project_form(), before);
}

#[test]
fn test_create_failure_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // 父路径是普通文件，无法创建子目录
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "x").expect("write file");

    let mut session = test_session();
    assert!(session.new_project(Some(&blocker)).is_none());
    assert!(session.current_project_path().is_none());
    assert!(session.take_message().is_some());
}

#[test]
fn test_scheme_columns_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = ConfigManager::in_memory();
    config.set_config_value(config_keys::SCENARIO_SCHEME_COLUMNS, "4");

    let mut session = AppSession::new(config);
    session
        .new_project(Some(temp_dir.path()))
        .expect("Failed to create project");

    let table = session
        .scenario_table("WT-风力发电单元出力(kW).xlsx")
        .expect("scenario table");
    assert_eq!(table.schemes.len(), 4);
    assert!(session.scenario_table("不存在.xlsx").is_none());
}

#[test]
fn test_validate_reports_errors() {
    let mut session = test_session();
    let mut form = sample_project_form();
    form.set("project_name", "").set("vat_rate", "130");

    let report = session.validate(&form);
    assert!(!report.is_valid());
    assert_eq!(report.errors().count(), 2);
    assert!(session.last_message().is_some());

    assert!(session.validate(&sample_project_form()).is_valid());
}

#[test]
fn test_shutdown_closes_project() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = test_session();
    session
        .new_project(Some(temp_dir.path()))
        .expect("Failed to create project");

    session.shutdown();
    assert!(session.current_project_path().is_none());
    assert!(session.project_form().is_empty());
}
