//! In-process fakes - 不依赖网络和 ffmpeg 的适配器

mod fake_encoder;
mod fake_provider;

pub use fake_encoder::FakeEncoder;
pub use fake_provider::FakeProvider;
