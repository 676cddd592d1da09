// ==========================================
// 风光氢储综合评估系统 - 项目存储
// ==========================================
// 职责: 新建项目目录、保存/加载项目 JSON、扁平表单读出
// 约束: 单线程同步调用；文件不加锁，外部并发修改以最后写入为准
// ==========================================

use crate::binding::field_mapper::{FieldMapper, MergeSummary};
use crate::binding::form::{IndicatorForm, ProjectForm};
use crate::binding::indicator_map::{apply_selection, project_selection};
use crate::domain::indicator::IndicatorSystem;
use crate::domain::project_input::ProjectInput;
use crate::schema::issues::{schema_issues, IssueLevel, SchemaIssue};
use crate::schema::workbooks::{output_workbook_names, scenario_workbook_names, OUTPUT_FOLDER};
use crate::schema::{default_indicator_system, default_project_input};
use crate::store::error::{StoreError, StoreResult};
use crate::store::json_io::{read_json, write_json};
use crate::store::workbook::{read_scenario_table, ScenarioTable, WorkbookWriter};
use std::fs;
use std::path::{Path, PathBuf};

pub const USER_INPUT_FILE: &str = "User_input.json";
pub const INDICATOR_SYSTEM_FILE: &str = "IndicatorSystem.json";

/// 新建项目目录名前缀
pub const PROJECT_NAME_PREFIX: &str = "新项目";

/// 目录是否为有效项目（根目录下两个 JSON 文件齐全）
pub fn is_valid_project_dir(path: &Path) -> bool {
    path.join(USER_INPUT_FILE).is_file() && path.join(INDICATOR_SYSTEM_FILE).is_file()
}

/// 按当前本地时间生成项目目录名，如 "新项目_20250120_083000"
pub fn timestamped_project_name() -> String {
    format!(
        "{}_{}",
        PROJECT_NAME_PREFIX,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// 一次保存的结果
#[derive(Debug, Clone, Default)]
pub struct SaveReport {
    pub merge: MergeSummary,
    /// 未识别的指标界面标识
    pub unknown_indicators: Vec<String>,
    pub issues: Vec<SchemaIssue>,
}

fn log_issues(issues: &[SchemaIssue]) {
    for issue in issues {
        match issue.level {
            IssueLevel::Error | IssueLevel::Warning => {
                tracing::warn!(path = %issue.path, "{}", issue.message)
            }
            IssueLevel::Info => tracing::info!(path = %issue.path, "{}", issue.message),
        }
    }
}

// ==========================================
// ProjectStore - 项目存储
// ==========================================
pub struct ProjectStore {
    current_project_path: Option<PathBuf>,
    project_data: Option<ProjectInput>,
    indicator_data: Option<IndicatorSystem>,
    mapper: FieldMapper,
    workbook_writer: WorkbookWriter,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(WorkbookWriter::default())
    }
}

impl ProjectStore {
    pub fn new(workbook_writer: WorkbookWriter) -> Self {
        Self {
            current_project_path: None,
            project_data: None,
            indicator_data: None,
            mapper: FieldMapper::new(),
            workbook_writer,
        }
    }

    pub fn current_project_path(&self) -> Option<&Path> {
        self.current_project_path.as_deref()
    }

    pub fn project_data(&self) -> Option<&ProjectInput> {
        self.project_data.as_ref()
    }

    pub fn indicator_data(&self) -> Option<&IndicatorSystem> {
        self.indicator_data.as_ref()
    }

    fn active_path(&self) -> StoreResult<&Path> {
        self.current_project_path
            .as_deref()
            .ok_or(StoreError::NoActiveProject)
    }

    // ===== 新建项目 =====

    /// 在 base_dir 下新建项目
    ///
    /// 目录结构:
    /// - <项目>/User_input.json, IndicatorSystem.json（默认内容）
    /// - <项目>/14 个场景时序工作簿
    /// - <项目>/输出表格/4 个空白财务报表
    ///
    /// 失败时不回滚已写出的文件，也不切换当前项目。
    pub fn create_project(&mut self, base_dir: &Path) -> StoreResult<PathBuf> {
        let project_path = base_dir.join(timestamped_project_name());
        tracing::info!(path = %project_path.display(), "新建项目");

        let output_folder = project_path.join(OUTPUT_FOLDER);
        fs::create_dir_all(&output_folder).map_err(|e| StoreError::FileWriteError {
            path: output_folder.display().to_string(),
            message: e.to_string(),
        })?;

        let project_data = default_project_input();
        let indicator_data = default_indicator_system();
        write_json(&project_path.join(USER_INPUT_FILE), &project_data)?;
        write_json(&project_path.join(INDICATOR_SYSTEM_FILE), &indicator_data)?;

        for name in scenario_workbook_names() {
            self.workbook_writer
                .write_scenario_template(&project_path.join(name))?;
        }
        for name in output_workbook_names() {
            self.workbook_writer.write_blank(&output_folder.join(name))?;
        }

        tracing::debug!(
            scenario = scenario_workbook_names().len(),
            output = output_workbook_names().len(),
            "项目工作簿已生成"
        );

        self.current_project_path = Some(project_path.clone());
        self.project_data = Some(project_data);
        self.indicator_data = Some(indicator_data);

        Ok(project_path)
    }

    // ===== 保存 =====

    /// 保存界面数据
    ///
    /// 从磁盘重新读取两个 JSON 文档，合并后依次写回
    /// User_input.json、IndicatorSystem.json。前一个文档失败时仍尝试后一个，
    /// 返回首个错误；两次写出之间无事务保证。
    pub fn save_project_data(
        &mut self,
        project_form: &ProjectForm,
        indicator_form: &IndicatorForm,
    ) -> StoreResult<SaveReport> {
        let project_path = self.active_path()?.to_path_buf();

        let user_input_result = self.save_user_input(&project_path, project_form);
        let indicator_result = self.save_indicator_system(&project_path, indicator_form);

        let (merge, issues) = user_input_result?;
        let unknown_indicators = indicator_result?;

        tracing::info!(
            path = %project_path.display(),
            updated = merge.updated,
            gated = merge.gated,
            "项目数据已保存"
        );

        Ok(SaveReport {
            merge,
            unknown_indicators,
            issues,
        })
    }

    fn save_user_input(
        &mut self,
        project_path: &Path,
        form: &ProjectForm,
    ) -> StoreResult<(MergeSummary, Vec<SchemaIssue>)> {
        let path = project_path.join(USER_INPUT_FILE);
        let mut project_data: ProjectInput = read_json(&path)?;

        let merge = self.mapper.merge_into(&mut project_data, form);
        let issues = schema_issues(&project_data);
        log_issues(&issues);

        write_json(&path, &project_data)?;
        self.project_data = Some(project_data);
        Ok((merge, issues))
    }

    fn save_indicator_system(
        &mut self,
        project_path: &Path,
        form: &IndicatorForm,
    ) -> StoreResult<Vec<String>> {
        let path = project_path.join(INDICATOR_SYSTEM_FILE);
        let mut indicator_data: IndicatorSystem = read_json(&path)?;

        let unknown = apply_selection(&mut indicator_data, form);
        if !unknown.is_empty() {
            tracing::warn!(ids = ?unknown, "忽略未识别的指标标识");
        }

        write_json(&path, &indicator_data)?;
        self.indicator_data = Some(indicator_data);
        Ok(unknown)
    }

    // ===== 加载 =====

    /// 加载项目目录
    ///
    /// 两个 JSON 文档须同时存在且可解析；失败时内存状态保持调用前不变。
    pub fn load_project(&mut self, project_path: &Path) -> StoreResult<()> {
        if !is_valid_project_dir(project_path) {
            return Err(StoreError::InvalidProjectDir(
                project_path.display().to_string(),
            ));
        }

        let project_data: ProjectInput = read_json(&project_path.join(USER_INPUT_FILE))?;
        let indicator_data: IndicatorSystem =
            read_json(&project_path.join(INDICATOR_SYSTEM_FILE))?;

        log_issues(&schema_issues(&project_data));

        self.current_project_path = Some(project_path.to_path_buf());
        self.project_data = Some(project_data);
        self.indicator_data = Some(indicator_data);

        tracing::info!(path = %project_path.display(), "项目已加载");
        Ok(())
    }

    /// 关闭当前项目
    pub fn close_project(&mut self) {
        if let Some(path) = self.current_project_path.take() {
            tracing::info!(path = %path.display(), "项目已关闭");
        }
        self.project_data = None;
        self.indicator_data = None;
    }

    // ===== 界面读出 =====

    /// 参数树 → 扁平表单；未加载项目时为空表单
    pub fn project_data_for_ui(&self) -> ProjectForm {
        self.project_data
            .as_ref()
            .map(|data| self.mapper.project(data))
            .unwrap_or_default()
    }

    /// 指标选择 → 界面表单；未加载项目时已选列表为空
    pub fn indicator_data_for_ui(&self) -> IndicatorForm {
        self.indicator_data
            .as_ref()
            .map(project_selection)
            .unwrap_or_default()
    }

    // ===== 场景工作簿 =====

    /// 读取当前项目的场景时序工作簿
    pub fn read_scenario_workbook(&self, name: &str) -> StoreResult<ScenarioTable> {
        if !scenario_workbook_names().contains(&name) {
            return Err(StoreError::UnknownWorkbook(name.to_string()));
        }
        read_scenario_table(&self.active_path()?.join(name))
    }
}
