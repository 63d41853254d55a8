//! # pathmatch-pattern
//!
//! The path pattern compiler. It turns a pattern such as `/users/:id(\d+)?`
//! into either a [`Recognizer`] (for matching a pathname and extracting
//! parameter values) or a [`Template`] (for generating a pathname from
//! parameter values).
//!
//! - [`token`]: Pattern syntax and the tokenizer
//! - [`recognizer`]: Recognizer construction with `end`/`strict`/`sensitive` options
//! - [`template`]: Generator templates and parameter sources
//!
//! # Pattern syntax
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `:name` | named parameter, one segment |
//! | `:name(\d+)` | named parameter with a custom pattern |
//! | `(\d+)` | unnamed parameter, named by its index |
//! | `:name?` | optional parameter |
//! | `:name*` | zero or more segments |
//! | `:name+` | one or more segments |
//! | `*` | anything (`.*`) |
//! | `\:` | escaped literal character |
//!
//! # Examples
//!
//! ```
//! use pathmatch_pattern::{compile_pattern, compile_template, CompileOptions};
//! use std::collections::HashMap;
//!
//! let (recognizer, keys) = compile_pattern("/users/:id", CompileOptions::default()).unwrap();
//! let m = recognizer.exec("/users/42/edit").unwrap();
//! assert_eq!(m.matched(), "/users/42");
//! assert_eq!(keys[0].name, "id");
//! assert_eq!(m.value(0), Some("42"));
//!
//! let template = compile_template("/users/:id").unwrap();
//! let mut params = HashMap::new();
//! params.insert("id", "7");
//! assert_eq!(template.render(&params).unwrap(), "/users/7");
//! ```

pub mod recognizer;
pub mod template;
pub mod token;

pub use recognizer::{compile_pattern, CompileOptions, Recognizer, RecognizerMatch};
pub use template::{compile_template, IntoParamValue, ParamSource, ParamValue, Template};
pub use token::{parse, Key, Token};
