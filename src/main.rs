use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rosterd::config::{AppState, Config};
use rosterd::logger;
use rosterd::server::{create_listener, signal, start_server_loop};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_from("config")?;

    // 创建 Tokio 运行时，根据 workers 配置设置线程数
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        println!("[CONFIG] Using {workers} worker threads");
    } else {
        println!("[CONFIG] Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = create_listener(addr)?;

    logger::init(&cfg)?;

    println!("[CONFIG] Loaded configuration:");
    println!("  - Server: {}:{}", cfg.server.host, cfg.server.port);
    println!("  - Static files: {}", cfg.static_files.dir);
    println!("  - Max body size: {} bytes", cfg.http.max_body_size);
    println!(
        "  - Max connections: {:?}\n",
        cfg.performance.max_connections
    );

    let state = Arc::new(AppState::new(cfg));
    let active_connections = Arc::new(AtomicUsize::new(0));

    let signal_handler = Arc::new(signal::SignalHandler::new());
    signal::start_signal_handler(Arc::clone(&signal_handler));

    logger::log_server_start(&addr, &state.config, state.roster.len().await);

    // LocalSet for spawn_local support in the connection handlers
    let local = tokio::task::LocalSet::new();
    local
        .run_until(start_server_loop(
            listener,
            state,
            active_connections,
            Arc::clone(&signal_handler.shutdown),
        ))
        .await?;

    if signal_handler.shutdown_requested.load(Ordering::SeqCst) {
        println!("[INFO] Server stopped");
    }

    Ok(())
}
