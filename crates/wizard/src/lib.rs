//! Meas Wizard
//!
//! Everything between raw keyboard input and the engine:
//!
//! - **Form**: raw field text and units, persisted to a key-value store
//! - **Steps**: the onboarding wizard order and its validation gates
//! - **Session**: ties the form, the wizard and the conversion table together
//!   and derives the result whenever every input is valid
//!
//! ```text
//!  BuyPrice ──▶ Quantity ──▶ CurrentPrice ──▶ Result
//!     ▲            │  ▲           │  ▲           │
//!     └── back ────┘  └── back ───┘  └── back ───┘
//! ```

pub mod error;
pub mod form;
pub mod navigator;
pub mod session;
pub mod step;

pub use error::{SessionError, SessionResult};
pub use form::FormState;
pub use navigator::WizardNavigator;
pub use session::CalculatorSession;
pub use step::{Step, first_incomplete_step};
