//! perfscope - scroll replay driver
//!
//! Replays a synthetic scroll stream through a throttle into a virtual list,
//! timing every window computation, and prints the collected summary.

#![allow(missing_docs)]

use clap::Parser;
use parking_lot::Mutex;
use perfscope::utils::{format_duration_ms, init_logging};
use perfscope::{
    MetricsCollector, PerformanceConfig, Throttle, VirtualList, VirtualScrollConfig, build_info,
};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "perfscope", version, about = "Replay a scroll stream and report timings")]
struct Args {
    /// Number of rows in the simulated list
    #[arg(long, default_value_t = 10_000)]
    items: usize,

    /// Number of scroll events to replay
    #[arg(long, default_value_t = 500)]
    events: usize,

    /// Milliseconds between scroll events
    #[arg(long, default_value_t = 4)]
    interval_ms: u64,

    /// Throttle interval applied to scroll events
    #[arg(long, default_value_t = 16)]
    throttle_ms: u64,

    /// Emit logs as JSON
    #[arg(long, env = "PERFSCOPE_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    init_logging(args.json);

    let build = build_info();
    info!(
        version = build.version,
        git_hash = build.git_hash,
        rust_version = build.rust_version,
        "perfscope starting"
    );

    let config = match PerformanceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid performance configuration");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        environment = %config.environment,
        sampling_rate = config.effective_sampling_rate(),
        items = args.items,
        events = args.events,
        "Starting scroll replay"
    );

    let summary = replay(&args, config).await;
    match serde_json::to_string_pretty(&summary) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn replay(args: &Args, config: PerformanceConfig) -> serde_json::Value {
    let collector = Arc::new(MetricsCollector::new(config));
    let scroll_config = VirtualScrollConfig::default();
    let step = scroll_config.item_height * 3.0;
    let list = Arc::new(Mutex::new(VirtualList::new(
        (0..args.items).collect::<Vec<_>>(),
        scroll_config,
    )));

    let throttle = {
        let collector = Arc::clone(&collector);
        let list = Arc::clone(&list);
        Throttle::new(Duration::from_millis(args.throttle_ms), move |scroll_top: f64| {
            let window = collector.measure("window_calc", || list.lock().set_scroll_top(scroll_top));
            collector.record_metric("rendered_rows", window.len() as f64);
        })
    };

    let interval = Duration::from_millis(args.interval_ms);
    let mut scroll_top = 0.0;
    for _ in 0..args.events {
        scroll_top += step;
        throttle.call(scroll_top);
        tokio::time::sleep(interval).await;
    }

    // let the trailing call land before reporting
    tokio::time::sleep(throttle.delay() + Duration::from_millis(1)).await;

    let final_window = list.lock().window();
    let timing = collector.get_metric_summary("window_calc").unwrap_or_default();
    info!(
        start = final_window.start_index,
        end = final_window.end_index,
        throttled_runs = timing.count,
        p50 = %format_duration_ms(timing.p50),
        p95 = %format_duration_ms(timing.p95),
        "Scroll replay finished"
    );

    collector.export_summary_json()
}
