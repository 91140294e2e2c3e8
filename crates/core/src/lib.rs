//! Domain layer of the KDMIP portal.
//!
//! Holds the compiled-in catalog (notices, circulars, messages, directory,
//! reports, admin documents, calendar, dashboard figures), the generic
//! filter/sort engine every listing goes through, the simulated upload
//! model, and the credential gate. No HTTP or runtime wiring lives here.

pub mod calendar;
pub mod catalog;
pub mod circular;
pub mod credentials;
pub mod dashboard;
pub mod directory;
pub mod document;
pub mod error;
pub mod filter;
pub mod message;
pub mod navigation;
pub mod notice;
pub mod report;
pub mod roles;
pub mod search;
pub mod types;
pub mod upload;
