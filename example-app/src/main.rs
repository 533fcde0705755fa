//! # 示例应用程序
//!
//! 演示自动配置如何发现 `example_app::demo` 中的组件，并在两个阶段注册到宿主。

mod demo;

use anyhow::{Context, Result};
use auto_config::{init_logging, AutoConfig, AutoConfigSettings, LoggingConfig};
use clap::Parser;
use di_abstractions::{Injector, InjectorExt};
use di_impl::DiContainerImpl;
use host_abstractions::TaskParams;
use host_impl::{DefaultBootstrap, DefaultEnvironment};
use std::path::PathBuf;
use tracing::info;

/// 默认扫描的命名空间
const DEFAULT_NAMESPACE: &str = "example_app::demo";

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn AutoConfig 示例应用")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 扫描的命名空间根，可重复指定，覆盖配置文件
    #[arg(short, long = "namespace")]
    namespaces: Vec<String>,

    /// 日志级别，覆盖配置文件
    #[arg(long)]
    log_level: Option<String>,

    /// 启动后执行的管理端任务
    #[arg(long)]
    task: Option<String>,

    /// 任务参数，格式为 key=value
    #[arg(long = "param")]
    params: Vec<String>,

    /// 注册完成后立即退出，不等待退出信号
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings =
        AutoConfigSettings::load(args.config.as_deref()).context("加载自动配置设置失败")?;
    if !args.namespaces.is_empty() {
        settings.namespaces = args.namespaces.clone();
    }
    if settings.namespaces.is_empty() {
        settings.namespaces.push(DEFAULT_NAMESPACE.to_string());
    }
    if let Some(level) = &args.log_level {
        settings.logging.level = level.clone();
    }

    init_logging(&LoggingConfig::from_settings(&settings.logging)?)?;
    info!("启动 Lorn AutoConfig 示例应用");

    let container = build_container();
    let auto_config = AutoConfig::from_settings(&settings)?;
    info!("发现类型数量: {}", auto_config.catalog().len());

    let mut bootstrap = DefaultBootstrap::new();
    let mut environment = DefaultEnvironment::new();

    auto_config.initialize(&mut bootstrap, &container)?;
    auto_config.run(&mut environment, &container)?;
    bootstrap.run_bundles(&mut environment)?;

    environment.start_all().await?;

    let report = environment.health_report_json().await;
    info!("健康检查报告: {}", serde_json::to_string_pretty(&report)?);

    if let Some(task) = &args.task {
        let output = environment
            .execute_task(task, &parse_params(&args.params)?)
            .await?;
        println!("{}", output);
    }

    if !args.once {
        info!("等待退出信号");
        tokio::signal::ctrl_c().await?;
        info!("收到退出信号，正在关闭应用");
    }

    environment.stop_all().await?;
    info!("应用已关闭");
    Ok(())
}

/// 绑定演示组件
fn build_container() -> DiContainerImpl {
    let mut container = DiContainerImpl::new();

    container.bind_instance(demo::DemoBundle);
    container.bind(|_| Ok(demo::DemoTask));
    container.bind_lazy_singleton(|_| Ok(demo::ConnectionPool::new(8)));
    container.bind(|injector: &dyn Injector| {
        let pool = injector.get::<demo::ConnectionPool>()?;
        Ok(demo::DatabaseHealthCheck::new(pool))
    });

    container
}

/// 解析 key=value 形式的任务参数
fn parse_params(raw: &[String]) -> Result<TaskParams> {
    let mut params = TaskParams::new();
    for item in raw {
        let (key, value) = item
            .split_once('=')
            .with_context(|| format!("任务参数格式应为 key=value: {}", item))?;
        params
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
    Ok(params)
}
