mod handlers;

pub use handlers::{AgentState, RobotState};

use crate::{
    Result,
    agent::TaskExecutor,
    bnet::{BnetClient, TokenPayload},
    config::Config,
    robot::ActionExecutor,
};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Task-execution surface of the mock agent. All routes answer GET and POST
/// (bodies are ignored) except `/battery_charge`, which is read-only.
pub fn agent_router(state: AgentState) -> Router {
    Router::new()
        .route(
            "/execute/:task_id",
            get(handlers::execute).post(handlers::execute),
        )
        .route(
            "/get_status/:task_id",
            get(handlers::get_status).post(handlers::get_status),
        )
        .route(
            "/print_state",
            get(handlers::print_state).post(handlers::print_state),
        )
        .route("/battery_charge", get(handlers::battery_charge))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Action surface of the mock robot; anything off these routes is a 404.
pub fn robot_router(state: RobotState) -> Router {
    Router::new()
        .route(
            "/action/:action",
            get(handlers::action_command).post(handlers::action_command),
        )
        .route(
            "/action_done",
            get(handlers::action_done).post(handlers::action_done),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Registers the agent with bnet and serves the task-execution surface.
/// A failed registration aborts startup.
pub async fn run_agent(config: Config) -> Result<()> {
    let client = BnetClient::new(&config.bnet);
    let payload = TokenPayload::agent_subscription(
        &config.bnet.place_id,
        &config.agent.id,
        &config.agent.host,
        config.agent.port,
    );
    client.add_token(&payload).await?;
    info!(
        "Subscribed to bnet @ {}:{} (place_id: {})",
        config.bnet.host, config.bnet.port, config.bnet.place_id
    );

    let executor = TaskExecutor::new(
        config.agent.exec_times(),
        config.agent.battery_decay_per_sec,
    );
    let state = AgentState {
        executor: Arc::new(Mutex::new(executor)),
    };
    let app = agent_router(state);

    let addr = SocketAddr::new(config.agent.host.parse()?, config.agent.port);
    info!("Agent \"{}\" configured @ {}", config.agent.id, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn run_robot(config: Config) -> Result<()> {
    let state = RobotState {
        executor: Arc::new(Mutex::new(ActionExecutor::new())),
    };
    let app = robot_router(state);

    let addr = SocketAddr::new(config.robot.host.parse()?, config.robot.port);
    info!("Robot serving @ {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
