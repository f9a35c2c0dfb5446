pub mod nonce;

pub use nonce::{
    generate_nonce, is_valid_nonce, EntropySource, Nonce, NonceGenerator, OsEntropy, RequestNonce,
};
