// Validation against an external reference checker.
//
// Entirely optional and advisory: the bridge compares local scan output
// against a hosted moderation service and logs discrepancies. The core
// engine has no compile-time dependency on any of this.

pub mod bridge;
pub mod hosted;
pub mod traits;

pub use bridge::{Discrepancies, ValidationBridge};
pub use hosted::HostedModerationChecker;
pub use traits::{ModerationVerdict, ReferenceChecker};
