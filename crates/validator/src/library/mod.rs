//! Named builders
//!
//! The [`Library`] is the namespace a schema description is resolved
//! against: root builders start a chain, member builders refine the schema
//! produced by the previous step. Members are gated by the receiver's kind,
//! so `min` exists on a number schema but not on a boolean one.

mod args;
mod error;
pub mod members;
pub mod roots;

use std::collections::HashMap;

pub use args::Args;
pub use error::BuildError;

use crate::schema::{KindTag, Schema};
use crate::term::Term;

/// A builder that starts a new chain.
pub type RootBuilder = fn(&Args) -> Result<Term, BuildError>;

/// A builder that refines an existing schema.
pub type MemberBuilder = fn(Schema, &Args) -> Result<Term, BuildError>;

const ALL: &[KindTag] = &[
    KindTag::Mixed,
    KindTag::String,
    KindTag::Number,
    KindTag::Boolean,
    KindTag::Object,
    KindTag::Array,
];
const SIZED: &[KindTag] = &[KindTag::Number, KindTag::String, KindTag::Array];
const LENGTHED: &[KindTag] = &[KindTag::String, KindTag::Array];
const NUMBER: &[KindTag] = &[KindTag::Number];
const STRING: &[KindTag] = &[KindTag::String];
const OBJECT: &[KindTag] = &[KindTag::Object];
const ARRAY: &[KindTag] = &[KindTag::Array];

#[derive(Debug, Clone, Copy)]
struct Member {
    kinds: &'static [KindTag],
    build: MemberBuilder,
}

/// Registry of root and member builders.
#[derive(Debug, Clone)]
pub struct Library {
    roots: HashMap<&'static str, RootBuilder>,
    members: HashMap<&'static str, Member>,
}

impl Library {
    /// Creates a library with every built-in builder registered.
    #[must_use]
    pub fn new() -> Self {
        let mut library = Self {
            roots: HashMap::new(),
            members: HashMap::new(),
        };

        library.register_roots();
        library.register_presence_members();
        library.register_bound_members();
        library.register_string_members();
        library.register_structure_members();

        library
    }

    /// Looks up a root builder.
    #[must_use]
    pub fn root(&self, name: &str) -> Option<RootBuilder> {
        self.roots.get(name).copied()
    }

    /// Looks up a member callable on `receiver`.
    #[must_use]
    pub fn member(&self, receiver: &Schema, name: &str) -> Option<MemberBuilder> {
        self.members
            .get(name)
            .filter(|member| member.kinds.contains(&receiver.tag()))
            .map(|member| member.build)
    }

    /// Builds a schema from a root name with the given arguments.
    pub fn call_root(&self, name: &str, items: Vec<Term>) -> Option<Result<Term, BuildError>> {
        let build = self.root(name)?;
        tracing::trace!(root = name, args = items.len(), "calling root builder");
        Some(build(&Args::new(name, items)))
    }

    /// Applies a member to `receiver` with the given arguments.
    pub fn call_member(
        &self,
        receiver: Schema,
        name: &str,
        items: Vec<Term>,
    ) -> Option<Result<Term, BuildError>> {
        let build = self.member(&receiver, name)?;
        tracing::trace!(member = name, kind = %receiver.tag(), args = items.len(), "calling member builder");
        Some(build(receiver, &Args::new(name, items)))
    }

    /// Names of every root builder, sorted.
    #[must_use]
    pub fn root_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.roots.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Names of every member callable on a schema of `kind`, sorted.
    #[must_use]
    pub fn member_names(&self, kind: KindTag) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .members
            .iter()
            .filter(|(_, member)| member.kinds.contains(&kind))
            .map(|(name, _)| *name)
            .collect();
        names.sort_unstable();
        names
    }

    fn root_entry(&mut self, name: &'static str, build: RootBuilder) {
        self.roots.insert(name, build);
    }

    fn member_entry(&mut self, name: &'static str, kinds: &'static [KindTag], build: MemberBuilder) {
        self.members.insert(name, Member { kinds, build });
    }

    // Registration methods for each category

    fn register_roots(&mut self) {
        self.root_entry("mixed", roots::mixed);
        self.root_entry("string", roots::string);
        self.root_entry("number", roots::number);
        self.root_entry("boolean", roots::boolean);
        self.root_entry("object", roots::object);
        self.root_entry("array", roots::array);
        self.root_entry("ref", roots::reference);
    }

    fn register_presence_members(&mut self) {
        self.member_entry("required", ALL, members::required);
        self.member_entry("optional", ALL, members::optional);
        self.member_entry("nullable", ALL, members::nullable);
        self.member_entry("label", ALL, members::label);
        self.member_entry("oneOf", ALL, members::one_of);
        self.member_entry("notOneOf", ALL, members::not_one_of);
    }

    fn register_bound_members(&mut self) {
        self.member_entry("min", SIZED, members::min_bound);
        self.member_entry("max", SIZED, members::max_bound);
        self.member_entry("length", LENGTHED, members::length);
        self.member_entry("moreThan", NUMBER, members::more_than_bound);
        self.member_entry("lessThan", NUMBER, members::less_than_bound);
        self.member_entry("positive", NUMBER, members::positive);
        self.member_entry("negative", NUMBER, members::negative);
        self.member_entry("integer", NUMBER, members::integer_rule);
    }

    fn register_string_members(&mut self) {
        self.member_entry("matches", STRING, members::matches_pattern);
        self.member_entry("email", STRING, members::email_format);
        self.member_entry("url", STRING, members::url_format);
        self.member_entry("lowercase", STRING, members::lowercase_rule);
        self.member_entry("uppercase", STRING, members::uppercase_rule);
    }

    fn register_structure_members(&mut self) {
        self.member_entry("shape", OBJECT, members::shape);
        self.member_entry("of", ARRAY, members::of);
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
