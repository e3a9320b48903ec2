use crate::config::Settings;
use crate::service::{Clock, RoadmapService, ServiceOptions, SystemClock};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// The running application: the user and roadmap actors plus the service
/// wired to them.
///
/// # Architecture
///
/// - **User actor**: the user registry, no dependencies (`Context = ()`)
/// - **Roadmap actor**: the roadmap store; `Context = UserClient` so it can
///   check owners on create
/// - **Service**: holds clients to both and runs the generation pipeline
///
/// # Example
///
/// ```ignore
/// let system = RoadmapSystem::start(&settings);
/// let me = system.service.sign_in(UserId::new("auth0|42"), "me@example.com").await?;
/// let (outcome, state) = system
///     .service
///     .generate(&me, RateLimitState::default(), request)
///     .await?;
/// system.shutdown().await?;
/// ```
pub struct RoadmapSystem<C: Clock = SystemClock> {
    pub service: RoadmapService<C>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RoadmapSystem<SystemClock> {
    /// Starts the system on wall-clock time.
    pub fn start(settings: &Settings) -> Self {
        Self::start_with_clock(settings, SystemClock)
    }
}

impl<C: Clock> RoadmapSystem<C> {
    /// Spawns both actors and wires the service to them.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start_with_clock(settings: &Settings, clock: C) -> Self {
        Self::with_options(settings.store.channel_capacity, settings.service_options(), clock)
    }

    pub fn with_options(channel_capacity: usize, options: ServiceOptions, clock: C) -> Self {
        // 1. Create actors (no dependencies yet)
        let (user_actor, user_client) = crate::user_actor::new(channel_capacity);
        let (roadmap_actor, roadmap_client) = crate::roadmap_actor::new(channel_capacity);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let roadmap_handle = tokio::spawn(roadmap_actor.run(user_client.clone()));

        info!(channel_capacity, "Roadmap system started");
        Self {
            service: RoadmapService::new(user_client, roadmap_client, options, clock),
            handles: vec![user_handle, roadmap_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the service closes the roadmap actor's channel. The roadmap
    /// actor then exits and drops its user client, which lets the user actor
    /// exit too. Any clones of the service still alive elsewhere keep the
    /// actors running, so this waits for them as well.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");
        drop(self.service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
