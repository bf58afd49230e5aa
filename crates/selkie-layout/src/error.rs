#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout interrupted")]
    Interrupted,

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error(transparent)]
    Graph(#[from] selkie_graph::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
