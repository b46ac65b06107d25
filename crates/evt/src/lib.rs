//! evt: search scraped cultural events.
//!
//! evt loads a merged CSV of events scraped from listing sites in several languages and
//! answers three kinds of question over it: which events match a set of weighted interests,
//! keywords, a city and a date window; which display categories exist; and which cities
//! cover the most of the requested interests.

#![warn(missing_docs)]

pub mod cli;
