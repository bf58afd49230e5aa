#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge references a node outside the declared node set: {node}")]
    UnknownNode { node: String },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
