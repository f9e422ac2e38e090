use crate::fragment::ToFragment;
use std::fmt::{self, Debug, Formatter};

/// A fluent string assembler.
///
/// A [`Builder`] owns an ordered sequence of text fragments. Every chaining operation appends at
/// most one fragment and hands the builder back, and [`build`](Self::build) joins them all with no
/// separator, clearing the sequence so the same builder can be reused.
///
/// Passing the absent value ([`None`]) to any append-style operation is a silent no-op. The wrap
/// operations never escape anything: if the wrapped text itself contains the wrapping character,
/// it comes out unmodified. This is a raw text assembler, not a safe serializer.
///
/// # Examples
/// ```rust
/// use sbb::sbb;
///
/// let greeting = sbb("Hello").w().append("World").build();
/// assert_eq!(greeting, "Hello World");
///
/// let pair = sbb(None::<&str>).dq("name").append(":").w().dq("value").build();
/// assert_eq!(pair, "\"name\": \"value\"");
/// ```
#[must_use]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Builder {
	fragments: Vec<String>,
}

assert_impl_all!(Builder: Send, Sync);

/// Joined previews longer than this many characters are truncated in [`Builder::preview`].
const PREVIEW_MAX: usize = 50;

/// How many characters of an over-long preview survive before the `...` marker.
const PREVIEW_KEPT: usize = 47;

/// Creates a [`Builder`] seeded with `seed` as its first fragment.
///
/// This is the conventional entry point for one-expression chains. Seeding with the absent value
/// yields an empty builder, so `sbb(None::<&str>)` and [`Builder::new`] are equivalent.
///
/// # Examples
/// ```rust
/// use sbb::{sbb, Builder};
///
/// assert_eq!(sbb("Hi").build(), "Hi");
/// assert_eq!(sbb(None::<&str>).build(), Builder::new().build());
/// ```
pub fn sbb(seed: impl ToFragment) -> Builder {
	let mut builder = Builder::new();
	builder.append(seed);
	builder
}

impl Builder {
	/// Creates a new, empty [`Builder`].
	pub const fn new() -> Self {
		Self { fragments: Vec::new() }
	}

	/// Creates a new builder with room for `cap` fragments before reallocating.
	pub fn with_capacity(cap: usize) -> Self {
		Self { fragments: Vec::with_capacity(cap) }
	}

	/// The number of pending fragments.
	pub fn len(&self) -> usize {
		self.fragments.len()
	}

	/// Whether there are no pending fragments.
	pub fn is_empty(&self) -> bool {
		self.fragments.is_empty()
	}

	fn push_char(&mut self, chr: char) -> &mut Self {
		self.fragments.push(chr.to_string());
		self
	}

	fn wrap(&mut self, open: char, value: impl ToFragment, close: char) -> &mut Self {
		if let Some(text) = value.to_fragment() {
			let mut fragment = String::with_capacity(text.len() + 2);
			fragment.push(open);
			fragment.push_str(&text);
			fragment.push(close);
			self.fragments.push(fragment);
		}

		self
	}

	/// Appends the text form of `value` unchanged.
	///
	/// The absent value appends nothing.
	///
	/// # Examples
	/// ```rust
	/// use sbb::Builder;
	///
	/// let mut builder = Builder::new();
	/// builder.append("answer=").append(42).append(None::<&str>);
	/// assert_eq!(builder.build(), "answer=42");
	/// ```
	pub fn append(&mut self, value: impl ToFragment) -> &mut Self {
		if let Some(fragment) = value.to_fragment() {
			self.fragments.push(fragment);
		}

		self
	}

	/// Synonym for [`append`](Self::append).
	#[inline]
	pub fn add(&mut self, value: impl ToFragment) -> &mut Self {
		self.append(value)
	}

	/// Synonym for [`append`](Self::append).
	#[inline]
	pub fn join(&mut self, value: impl ToFragment) -> &mut Self {
		self.append(value)
	}

	/// Appends `value` wrapped in single quotes: `'value'`.
	///
	/// Embedded quotes are not escaped.
	pub fn single_quote(&mut self, value: impl ToFragment) -> &mut Self {
		self.wrap('\'', value, '\'')
	}

	/// Synonym for [`single_quote`](Self::single_quote).
	#[inline]
	pub fn sq(&mut self, value: impl ToFragment) -> &mut Self {
		self.single_quote(value)
	}

	/// Appends `value` wrapped in double quotes: `"value"`.
	///
	/// Embedded quotes are not escaped.
	pub fn double_quote(&mut self, value: impl ToFragment) -> &mut Self {
		self.wrap('"', value, '"')
	}

	/// Synonym for [`double_quote`](Self::double_quote).
	#[inline]
	pub fn dq(&mut self, value: impl ToFragment) -> &mut Self {
		self.double_quote(value)
	}

	/// Appends `value` wrapped in square brackets: `[value]`.
	pub fn square_brackets(&mut self, value: impl ToFragment) -> &mut Self {
		self.wrap('[', value, ']')
	}

	/// Synonym for [`square_brackets`](Self::square_brackets).
	#[inline]
	pub fn sb(&mut self, value: impl ToFragment) -> &mut Self {
		self.square_brackets(value)
	}

	/// Appends `value` wrapped in curly brackets: `{value}`.
	pub fn curly_brackets(&mut self, value: impl ToFragment) -> &mut Self {
		self.wrap('{', value, '}')
	}

	/// Synonym for [`curly_brackets`](Self::curly_brackets).
	#[inline]
	pub fn cb(&mut self, value: impl ToFragment) -> &mut Self {
		self.curly_brackets(value)
	}

	/// Appends `value` wrapped in parentheses: `(value)`.
	pub fn parentheses(&mut self, value: impl ToFragment) -> &mut Self {
		self.wrap('(', value, ')')
	}

	/// Synonym for [`parentheses`](Self::parentheses).
	#[inline]
	pub fn p(&mut self, value: impl ToFragment) -> &mut Self {
		self.parentheses(value)
	}

	/// Appends `value` wrapped in angle brackets: `<value>`.
	pub fn angle_brackets(&mut self, value: impl ToFragment) -> &mut Self {
		self.wrap('<', value, '>')
	}

	/// Synonym for [`angle_brackets`](Self::angle_brackets).
	#[inline]
	pub fn ab(&mut self, value: impl ToFragment) -> &mut Self {
		self.angle_brackets(value)
	}

	/// Appends a newline.
	pub fn newline(&mut self) -> &mut Self {
		self.push_char('\n')
	}

	/// Synonym for [`newline`](Self::newline).
	#[inline]
	pub fn n(&mut self) -> &mut Self {
		self.newline()
	}

	/// Appends a tab.
	pub fn tab(&mut self) -> &mut Self {
		self.push_char('\t')
	}

	/// Synonym for [`tab`](Self::tab).
	#[inline]
	pub fn t(&mut self) -> &mut Self {
		self.tab()
	}

	/// Appends a single space.
	pub fn space(&mut self) -> &mut Self {
		self.push_char(' ')
	}

	/// Synonym for [`space`](Self::space).
	#[inline]
	pub fn w(&mut self) -> &mut Self {
		self.space()
	}

	/// Appends a comma.
	pub fn comma(&mut self) -> &mut Self {
		self.push_char(',')
	}

	/// Synonym for [`comma`](Self::comma), under the original library's spelling.
	#[inline]
	pub fn coma(&mut self) -> &mut Self {
		self.comma()
	}

	/// Appends a period.
	pub fn period(&mut self) -> &mut Self {
		self.push_char('.')
	}

	/// Synonym for [`period`](Self::period).
	#[inline]
	pub fn dot(&mut self) -> &mut Self {
		self.period()
	}

	/// Joins all pending fragments in insertion order and clears the builder.
	///
	/// The builder stays valid afterwards: a second `build` with no intervening appends returns
	/// the empty string, and new fragments start a fresh accumulation.
	///
	/// # Examples
	/// ```rust
	/// use sbb::sbb;
	///
	/// let mut builder = sbb("x");
	/// assert_eq!(builder.build(), "x");
	/// assert_eq!(builder.build(), "");
	/// assert_eq!(builder.append("y").build(), "y");
	/// ```
	pub fn build(&mut self) -> String {
		let built = self.fragments.concat();
		self.fragments.clear();
		built
	}

	/// Synonym for [`build`](Self::build).
	#[inline]
	pub fn bld(&mut self) -> String {
		self.build()
	}

	/// Joins the pending fragments for inspection, without clearing them.
	///
	/// Previews longer than 50 characters keep their first 47 characters followed by `...`.
	/// Truncation counts characters, never splitting a code point.
	///
	/// # Examples
	/// ```rust
	/// use sbb::sbb;
	///
	/// let mut builder = sbb("pending");
	/// assert_eq!(builder.preview(), "pending");
	/// assert_eq!(builder.build(), "pending"); // preview didn't consume anything
	/// ```
	pub fn preview(&self) -> String {
		let mut preview = self.fragments.concat();

		if preview.chars().count() > PREVIEW_MAX {
			let cut = preview.char_indices().nth(PREVIEW_KEPT).map_or(preview.len(), |(idx, _)| idx);
			preview.truncate(cut);
			preview.push_str("...");
		}

		preview
	}
}

impl Debug for Builder {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_tuple("Builder").field(&self.preview()).finish()
	}
}

/// The consuming form of [`Builder::build`].
impl From<Builder> for String {
	fn from(mut builder: Builder) -> Self {
		builder.build()
	}
}

impl<T: ToFragment> Extend<T> for Builder {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.append(value);
		}
	}
}

impl<T: ToFragment> FromIterator<T> for Builder {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut builder = Self::new();
		builder.extend(iter);
		builder
	}
}

/// Each `write_str` contributes one fragment, so `write!(builder, ...)` chains work too.
impl fmt::Write for Builder {
	fn write_str(&mut self, text: &str) -> fmt::Result {
		self.fragments.push(text.to_owned());
		Ok(())
	}
}
