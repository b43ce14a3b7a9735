// Error type shared by the wave sources, the sampler and the plot window

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The step size is one turn divided by the wave count.
    #[error("cannot divide the turn by an empty wave list")]
    EmptyWaves,

    #[error("failed to decode wave set: {0}")]
    Source(#[from] serde_json::Error),

    #[error("plot window failed: {0}")]
    Display(#[from] eframe::Error),
}
