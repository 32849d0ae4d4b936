mod embedding;
mod remote_store;

pub use embedding::IEmbeddingProvider;
pub use remote_store::IRemoteStore;
