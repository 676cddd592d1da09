// ==========================================
// 风光氢储综合评估系统 - 命令行入口
// ==========================================
// 用法:
//   h2-energy-eval                 打印版本与用法
//   h2-energy-eval <项目目录>      打开项目并以 JSON 输出界面表单
//   h2-energy-eval --new <父目录>  在父目录下新建项目
// ==========================================

use anyhow::{bail, Context, Result};
use h2_energy_eval::app::AppSession;
use h2_energy_eval::config::ConfigManager;
use h2_energy_eval::{i18n, logging, APP_NAME, VERSION};
use serde_json::json;
use std::path::PathBuf;

fn main() -> Result<()> {
    // 日志级别来自配置，加载错误待日志初始化后再记录
    let (config, config_error) = match ConfigManager::load_default() {
        Ok(config) => (config, None),
        Err(e) => (ConfigManager::in_memory(), Some(e)),
    };

    logging::init_with_default(&config.log_filter());
    i18n::set_locale(&config.locale());

    tracing::info!("==================================================");
    tracing::info!("{}", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    if let Some(e) = &config_error {
        tracing::warn!(error = %e, "配置加载失败，使用默认配置");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut session = AppSession::new(config);

    let result = run(&mut session, &args);
    session.shutdown();
    result
}

fn run(session: &mut AppSession, args: &[String]) -> Result<()> {
    match args {
        [] => print_usage(),
        [flag, base] if flag == "--new" => {
            let path = session.new_project(Some(PathBuf::from(base).as_path()));
            report(session);
            if path.is_none() {
                bail!("新建项目失败");
            }
        }
        [project] => {
            let opened = session.open_project(&PathBuf::from(project));
            report(session);
            if !opened {
                bail!("打开项目失败: {}", project);
            }

            let output = json!({
                "project": session.project_form(),
                "indicators": session.indicator_form(),
            });
            let text = serde_json::to_string_pretty(&output).context("表单序列化失败")?;
            println!("{}", text);
        }
        _ => {
            print_usage();
            bail!("参数错误");
        }
    }

    Ok(())
}

fn report(session: &mut AppSession) {
    if let Some(message) = session.take_message() {
        eprintln!("{}", message);
    }
}

fn print_usage() {
    println!("==================================================");
    println!("{} v{}", APP_NAME, VERSION);
    println!("==================================================");
    println!();
    println!("用法:");
    println!("  h2-energy-eval <项目目录>       打开项目并输出界面表单");
    println!("  h2-energy-eval --new <父目录>   新建项目");
}
