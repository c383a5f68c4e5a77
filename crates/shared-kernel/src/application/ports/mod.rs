mod message_consumer;
mod message_producer;

pub use message_consumer::{Acknowledgement, MessageConsumer, MessageHandler};
pub use message_producer::MessageProducer;
