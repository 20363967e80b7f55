//! Taggable trait definition

use crate::config::TagConfig;
use crate::normalizer::normalize_tags;

/// Trait for documents that carry a normalized tag list
///
/// Implementors only expose storage for the list; assignment and
/// re-normalization are provided.
///
/// # Examples
///
/// ```rust
/// use datacat_taggit::Taggable;
///
/// struct Post {
///     tags: Vec<String>,
/// }
///
/// impl Taggable for Post {
///     fn tags(&self) -> &[String] {
///         &self.tags
///     }
///
///     fn tags_mut(&mut self) -> &mut Vec<String> {
///         &mut self.tags
///     }
/// }
///
/// let mut post = Post { tags: Vec::new() };
/// post.set_tags(["Rust", "rust!"]);
/// assert_eq!(post.tags(), ["rust"]);
/// ```
pub trait Taggable {
	fn tags(&self) -> &[String];

	fn tags_mut(&mut self) -> &mut Vec<String>;

	/// Replace the tag list with the normalized form of `raw`
	fn set_tags<I, S>(&mut self, raw: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
		Self: Sized,
	{
		self.set_tags_with(raw, &TagConfig::default());
	}

	/// Like [`Taggable::set_tags`] with explicit bounds
	fn set_tags_with<I, S>(&mut self, raw: I, config: &TagConfig)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
		Self: Sized,
	{
		*self.tags_mut() = normalize_tags(raw, config);
	}

	/// Re-apply normalization to the stored list
	fn clean_tags(&mut self, config: &TagConfig) {
		let current = std::mem::take(self.tags_mut());
		*self.tags_mut() = normalize_tags(current, config);
	}

	fn has_tag(&self, slug: &str) -> bool {
		self.tags().iter().any(|t| t == slug)
	}
}
