//! Transit trip planner front end.
//!
//! Lets a user search for stops, pick a start and destination, request
//! itineraries from the planning backend and see them as route cards and
//! map overlays.

pub mod backend;
pub mod config;
pub mod controller;
pub mod domain;
pub mod itinerary;
pub mod selection;
pub mod stops;
pub mod web;
