//! # CompatKit DOM
//!
//! Attribute, class-list and tree-traversal conveniences over the backend
//! boundary.
//!
//! ## Design Goals
//!
//! 1. **Name fixups in one place**: the attribute/property naming mismatch
//!    (`class` vs `className`, `for` vs `htmlFor`) never leaks to callers
//! 2. **Element-only walks**: traversal skips text and comment nodes on
//!    every engine, whether or not it has element-typed sibling links
//! 3. **Token-level class edits**: class mutations rewrite the token list,
//!    never blind string concatenation

pub mod attr;
pub mod classes;
pub mod create;
pub mod traverse;

pub use attr::{attr, prop, remove_attr, set_attr, set_attrs, set_prop};
pub use classes::{add_class, has_class, remove_class, replace_class, toggle_class};
pub use create::{contains, create_element, create_style, remove_node};
pub use traverse::{
    ancestors, element_children, find_tag, first_element_child, last_element_child, next_element,
    next_elements, parent_element, prev_element, prev_elements,
};
