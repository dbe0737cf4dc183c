//! Common reusable UI components
//!
//! Components shared across the pages: buttons, form fields, messages,
//! loading placeholders, badges and the accordion.

pub mod accordion;
pub mod badge;
pub mod button;
pub mod form;
pub mod message;
pub mod spinner;

pub use accordion::{AccordionItem, AccordionState};
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant, IconButton};
pub use form::{FormField, TextAreaField};
pub use message::{EmptyMessage, ErrorMessage, SuccessMessage};
pub use spinner::{CardSkeleton, CardSkeletonGrid, LoadingSpinner, Skeleton, Spinner, SpinnerSize};
