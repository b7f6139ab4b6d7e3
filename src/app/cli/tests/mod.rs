//! Tests for the command line front end
