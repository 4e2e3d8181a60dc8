//! Quote flows composing the pricing and mesh services

pub mod quote_service;

pub use quote_service::{
    manual_quote, mesh_quote, public_quote, resolve_material, BatchEntry, BatchReport, MeshQuote,
    PublicQuoteRequest, QuoteServiceError,
};
