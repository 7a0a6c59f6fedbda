pub mod batch_sampler;
pub mod random_sampler;
pub mod sequential_sampler;
pub mod traits;

pub use batch_sampler::BatchSampler;
pub use random_sampler::RandomSampler;
pub use sequential_sampler::SequentialSampler;
pub use traits::Sampler;
