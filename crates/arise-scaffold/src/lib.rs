//! arise-scaffold
//!
//! Generates CRUD boilerplate for a resource: a SQLAlchemy model, Pydantic
//! schemas and a FastAPI router for the backend, and a Next.js page with
//! TypeScript types for the frontend.

pub mod config;
pub mod error;
pub mod generate;
pub mod render;
pub mod resource;
