// SPDX-License-Identifier: MPL-2.0
//! Response resolution protocol.
//!
//! Every `show` call creates a response that settles exactly once, fed by
//! whichever of these reaches it first:
//!
//! - timeout expiry of a visible, non-persistent entry ([`Outcome::Timeout`])
//! - a button press reported by the presentation layer ([`Outcome::ButtonPressed`])
//! - a programmatic hide ([`Outcome::HiddenByExternalCall`])
//! - an outside tap or back gesture on a dismissable dialog ([`Outcome::Dismissed`])
//! - a prompt's text submission ([`Outcome::InputSubmitted`])
//!
//! Every outcome is a success value with a discriminant; the future has no
//! failure channel. Later settlement attempts are logged and discarded.

mod outcome;
mod settlement;

pub use outcome::{Outcome, OutcomeKind, Response};
pub use settlement::ResponseFuture;
pub(crate) use settlement::Settlement;
