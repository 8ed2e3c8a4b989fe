pub mod domains;
pub mod events;
pub mod operation;
pub mod repositories;

// Re-export commonly used types
pub use domains::{Domain, DomainRepository};
pub use events::{
    CancellableEventArgs, DomainEvents, EventArgs, EventMessage,
    EventMessageType, EventMessages, SubscriptionId,
};
pub use operation::{Attempt, OperationStatus, OperationStatusType};
pub use repositories::{DomainResult, UnitOfWork, UnitOfWorkProvider};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
