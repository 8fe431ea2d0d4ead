use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes domain events to the structured log stream of the owning service.
#[derive(Debug)]
pub(crate) struct LogPublisher {
    source: String,
}

impl LogPublisher {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        info!(
            source = %self.source,
            event_id = %event.event_id,
            name = %event.name,
            group = %event.group,
            key = %event.key,
            kind = ?event.kind,
            data = %event.json_data,
            "domain event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::LogPublisher;

    #[tokio::test]
    async fn test_should_publish() {
        let publisher = LogPublisher::new("test");
        let event = DomainEvent::added("books", "books", "1", &HashMap::new(), &"data").expect("build event");
        publisher.publish(&event).await.expect("should publish");
    }
}
