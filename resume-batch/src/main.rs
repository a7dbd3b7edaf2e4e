use chrono::Local;
use clap::Parser;
use extractors::{default_registry, Dispatcher};
use resume_batch::{BatchConfig, BatchOutcome, BatchRunner, Cli, CsvReportWriter};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file_path.as_deref());

    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let started = Local::now();
    println!("{}", started.format("%Y年%m月%d日%H点%M分%S秒"));

    let config = match BatchConfig::load(cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("配置错误：{error}");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("简历所在目录：{}", config.resume_dir.display());
    if config.transfer {
        println!(
            "简历文件处理：解析完毕后简历文件会剪切到 {} 并按格式重新命名",
            config.output_dir.display()
        );
    } else {
        println!("简历文件处理：解析完毕后不做任何处理");
    }
    println!("结果报告存放目录：{}", config.report_dir.display());

    let dispatcher = Dispatcher::new(default_registry());
    tracing::debug!(extractors = ?dispatcher.registry().names(), "dispatcher ready");
    let runner = BatchRunner::new(&config, &dispatcher, &CsvReportWriter);

    match runner.run(started)? {
        BatchOutcome::NothingParsed { scanned } => {
            tracing::info!(scanned, "no resume parsed");
            println!("未处理任何简历...");
        }
        BatchOutcome::Completed(summary) => {
            println!(
                "共扫描 {} 个文件，成功解析 {} 份简历，{} 个文件未能解析",
                summary.scanned, summary.parsed, summary.unresolved
            );
            match &summary.report {
                Some(path) => println!("成功将结果写入报告：《{}》", path.display()),
                None => eprintln!("未能正确将结果写入报告"),
            }
            if let Some(transfer) = summary.transfer {
                println!(
                    "已转移 {} 份简历，{} 份转移失败",
                    transfer.moved, transfer.failed
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Console logging on stderr, plus a plain-text file when `log_file_path` is set.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_tracing(log_file_path: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("resume-batch.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();

        None
    }
}
