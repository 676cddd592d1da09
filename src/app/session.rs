// ==========================================
// 风光氢储综合评估系统 - 应用会话
// ==========================================
// 职责: 持有配置与项目存储，向界面层提供 新建/打开/保存 入口
// 约束: 所有失败只记录日志与用户提示，不 panic、不向界面抛错
// ==========================================

use crate::binding::form::{IndicatorForm, ProjectForm};
use crate::binding::validator::{FormValidator, ValidationReport};
use crate::config::ConfigManager;
use crate::i18n::{t, t_with_args};
use crate::store::{ProjectStore, ScenarioTable, StoreError, WorkbookWriter};
use std::path::{Path, PathBuf};

/// 应用会话
///
/// 界面外壳持有唯一实例，所有调用在界面线程上同步完成。
pub struct AppSession {
    config: ConfigManager,
    store: ProjectStore,
    validator: FormValidator,
    /// 最近一次操作的用户提示
    last_message: Option<String>,
}

impl AppSession {
    pub fn new(config: ConfigManager) -> Self {
        let writer = WorkbookWriter::new(config.scenario_scheme_columns());
        tracing::info!(
            scheme_columns = writer.scheme_columns(),
            "初始化应用会话"
        );

        Self {
            config,
            store: ProjectStore::new(writer),
            validator: FormValidator::new(),
            last_message: None,
        }
    }

    /// 使用默认位置的配置文件；配置不可用时退回内存配置
    pub fn from_default_config() -> Self {
        let config = ConfigManager::load_default().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "配置加载失败，使用默认配置");
            ConfigManager::in_memory()
        });
        Self::new(config)
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn current_project_path(&self) -> Option<&Path> {
        self.store.current_project_path()
    }

    /// 目录选择框的初始目录
    pub fn default_project_root(&self) -> Option<PathBuf> {
        self.config.default_project_root()
    }

    // ===== 项目操作 =====

    /// 新建项目
    ///
    /// base_dir 为 None 表示用户取消了目录选择，不做任何事。
    pub fn new_project(&mut self, base_dir: Option<&Path>) -> Option<PathBuf> {
        let Some(base_dir) = base_dir else {
            tracing::debug!("用户取消新建项目");
            return None;
        };

        match self.store.create_project(base_dir) {
            Ok(path) => {
                let shown = path.display().to_string();
                self.last_message =
                    Some(t_with_args("project.created", &[("path", shown.as_str())]));
                Some(path)
            }
            Err(e) => {
                tracing::error!(base = %base_dir.display(), error = %e, "新建项目失败");
                self.last_message = Some(t_with_args(
                    "project.create_failed",
                    &[("error", e.to_string().as_str())],
                ));
                None
            }
        }
    }

    /// 打开项目目录
    pub fn open_project(&mut self, path: &Path) -> bool {
        match self.store.load_project(path) {
            Ok(()) => {
                let shown = path.display().to_string();
                self.last_message =
                    Some(t_with_args("project.opened", &[("path", shown.as_str())]));
                true
            }
            Err(StoreError::InvalidProjectDir(dir)) => {
                tracing::warn!(path = %dir, "不是有效的项目目录");
                self.last_message =
                    Some(t_with_args("project.invalid_dir", &[("path", dir.as_str())]));
                false
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "打开项目失败");
                self.last_message = Some(t_with_args(
                    "project.open_failed",
                    &[("error", e.to_string().as_str())],
                ));
                false
            }
        }
    }

    /// 保存界面数据
    pub fn save(&mut self, project_form: &ProjectForm, indicator_form: &IndicatorForm) -> bool {
        match self.store.save_project_data(project_form, indicator_form) {
            Ok(_) => {
                self.last_message = Some(t("project.saved"));
                true
            }
            Err(StoreError::NoActiveProject) => {
                tracing::warn!("未打开项目，忽略保存");
                self.last_message = Some(t("project.no_active"));
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "保存项目失败");
                self.last_message = Some(t_with_args(
                    "project.save_failed",
                    &[("error", e.to_string().as_str())],
                ));
                false
            }
        }
    }

    /// 表单校验（提示性，不阻止保存）
    pub fn validate(&mut self, project_form: &ProjectForm) -> ValidationReport {
        let report = self.validator.validate(project_form);
        let errors = report.errors().count();
        if errors > 0 {
            self.last_message = Some(t_with_args(
                "validation.failed",
                &[("count", errors.to_string().as_str())],
            ));
        }
        report
    }

    // ===== 界面读出 =====

    pub fn project_form(&self) -> ProjectForm {
        self.store.project_data_for_ui()
    }

    pub fn indicator_form(&self) -> IndicatorForm {
        self.store.indicator_data_for_ui()
    }

    /// 读取场景时序工作簿；失败时返回 None
    pub fn scenario_table(&self, name: &str) -> Option<ScenarioTable> {
        self.store
            .read_scenario_workbook(name)
            .map_err(|e| tracing::warn!(workbook = name, error = %e, "场景工作簿读取失败"))
            .ok()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// 取出并清空最近一次用户提示
    pub fn take_message(&mut self) -> Option<String> {
        self.last_message.take()
    }

    pub fn config_mut(&mut self) -> &mut ConfigManager {
        &mut self.config
    }

    /// 退出：关闭项目，配置有修改时写回
    pub fn shutdown(&mut self) {
        self.store.close_project();
        if self.config.is_dirty() {
            if let Err(e) = self.config.save() {
                tracing::warn!(error = %e, "配置写回失败");
            }
        }
        tracing::info!("应用会话结束");
    }
}
