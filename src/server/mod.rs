//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the record label site,
//! including API endpoints, form actions, business logic, data access, and image rendering.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - JSON route handlers, access control, and DTO conversion
//! - **Action Layer** (`action/`) - Form submissions answering with a `FormState`
//! - **Service Layer** (`service/`) - Business logic and persistence error classification
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Route gate, role guards, and session wrappers
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Database** (`db`) - Process-wide connection pool with explicit init and shutdown
//! - **State** (`state`) - Shared application state (DB, HTTP client, overlay renderer)
//! - **Startup** (`startup`) - Initialization of logging, sessions, and services
//! - **Router** (`router`) - Route table, composed with role guards and the route gate
//! - **Docs** (`docs`) - OpenAPI document metadata
//! - **Overlay** (`overlay/`) - Banner image cropping and text overlay
//!
//! # Request Flow
//!
//! 1. **Session layer** loads the signed session
//! 2. **Route gate** redirects or rejects requests to gated pages
//! 3. **Controller** or **action** validates input and access, converts DTOs to params
//! 4. **Service** executes business logic and classifies failures
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO, or the action to a `FormState`

pub mod action;
pub mod config;
pub mod controller;
pub mod data;
pub mod db;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod overlay;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
