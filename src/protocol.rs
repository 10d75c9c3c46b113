//! `JMSDeliveryMode` header values as defined by the JMS API and used by
//! ActiveMQ on the wire.

pub const JMS_NON_PERSISTENT: i32 = 1;
pub const JMS_PERSISTENT: i32 = 2;
