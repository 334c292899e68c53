//! Infrastructure implementations of the `ports` traits.

pub mod redis_stream_publisher;

pub use redis_stream_publisher::RedisStreamPublisher;
