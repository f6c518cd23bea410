//! Error types for dump operations.

use thiserror::Error;

/// Boxed error raised inside a serializer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while dumping a value.
///
/// Serializers report their own failures as [`DumpError::Custom`] or
/// [`DumpError::Other`] (a `serde_json::Error` converts into the latter with
/// `?`). The dispatcher attaches the failing type once, turning any error that
/// names no type into [`DumpError::Serializer`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DumpError {
	/// A serializer failed for a value of the given type.
	#[error("failed to serialize `{type_name}`: {source}")]
	Serializer {
		/// Concrete type of the value being serialized.
		type_name: &'static str,
		/// Error raised by the serializer.
		#[source]
		source: BoxError,
	},

	/// The object fallback was asked to serialize a value without fields.
	#[error("`{type_name}` exposes no fields to serialize as an object")]
	NotAnObject {
		/// Concrete type of the value.
		type_name: &'static str,
	},

	/// The configured depth limit was exceeded.
	#[error("maximum depth {max_depth} exceeded while serializing `{type_name}`")]
	MaxDepthExceeded {
		/// Concrete type of the value at which the limit was hit.
		type_name: &'static str,
		/// Configured limit.
		max_depth: usize,
	},

	/// Serializer failure described by a message.
	#[error("{0}")]
	Custom(String),

	/// Serializer failure wrapping another error.
	#[error("{0}")]
	Other(BoxError),

	/// Settings could not be parsed.
	#[error("invalid dump settings: {0}")]
	Settings(String),
}

impl DumpError {
	/// Creates a serializer failure from a message.
	pub fn custom(message: impl std::fmt::Display) -> Self {
		DumpError::Custom(message.to_string())
	}

	/// Creates a serializer failure wrapping another error.
	pub fn other(error: impl Into<BoxError>) -> Self {
		DumpError::Other(error.into())
	}

	/// Type the failure is attributed to, once annotated.
	pub fn type_name(&self) -> Option<&'static str> {
		match self {
			DumpError::Serializer { type_name, .. }
			| DumpError::NotAnObject { type_name }
			| DumpError::MaxDepthExceeded { type_name, .. } => Some(*type_name),
			_ => None,
		}
	}

	/// Whether the failure already names the type it happened in.
	pub fn is_annotated(&self) -> bool {
		self.type_name().is_some()
	}

	/// Attaches `type_name` unless a more specific type is already attached.
	pub(crate) fn annotate(self, type_name: &'static str) -> Self {
		match self {
			DumpError::Other(source) => DumpError::Serializer { type_name, source },
			annotated if annotated.is_annotated() => annotated,
			unannotated => DumpError::Serializer {
				type_name,
				source: Box::new(unannotated),
			},
		}
	}
}

impl From<serde_json::Error> for DumpError {
	fn from(error: serde_json::Error) -> Self {
		DumpError::Other(Box::new(error))
	}
}

/// Result type alias for dump operations.
pub type DumpResult<T> = Result<T, DumpError>;
