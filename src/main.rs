use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use user_service::{
    app::{self, system, AppState},
    infrastructure::{load_config, Logger},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let _guard = Logger::init(&config.logging)?;

    info!("启动 {} v{}", config.service.title, config.service.version);

    let state = AppState::new(config.service.clone());
    let app = app::router(state, config.server.request_timeout());

    let (host, port) = config.server.bind_addr();
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("无法绑定到 {}:{}", host, port))?;

    info!("🚀 服务运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    for endpoint in system::ENDPOINTS {
        info!("   {}", endpoint);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听 Ctrl-C 失败: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务...");
}
