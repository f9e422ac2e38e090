/// A value that can be converted into a single text fragment.
///
/// Every append-style operation on [`Builder`](crate::Builder) is bounded by this trait, so the
/// conversion is resolved once at the call site. Returning [`None`] is the "absent value": the
/// operation silently appends nothing at all (not an empty fragment).
///
/// The conversion itself is infallible. Types convert through their canonical display form, so
/// `5` becomes `"5"`, `true` becomes `"true"`, and so on.
///
/// # Examples
/// ```rust
/// use sbb::ToFragment;
///
/// assert_eq!("hello".to_fragment(), Some("hello".to_string()));
/// assert_eq!(42.to_fragment(), Some("42".to_string()));
/// assert_eq!(None::<i64>.to_fragment(), None);
/// ```
pub trait ToFragment {
	/// Converts `self` into the text it contributes, or [`None`] for the absent value.
	fn to_fragment(&self) -> Option<String>;
}

impl<T: ToFragment + ?Sized> ToFragment for &T {
	fn to_fragment(&self) -> Option<String> {
		T::to_fragment(*self)
	}
}

/// [`None`] is the designated absent value: appending it is a no-op.
impl<T: ToFragment> ToFragment for Option<T> {
	fn to_fragment(&self) -> Option<String> {
		self.as_ref().and_then(T::to_fragment)
	}
}

macro_rules! impl_to_fragment_via_display {
	($($ty:ty),* $(,)?) => {$(
		impl ToFragment for $ty {
			fn to_fragment(&self) -> Option<String> {
				Some(self.to_string())
			}
		}
	)*};
}

impl_to_fragment_via_display!(
	str, String, char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32,
	f64
);
