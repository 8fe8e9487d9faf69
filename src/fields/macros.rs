/// Constructs a field element from its raw (Montgomery form) representation.
/// The arguments must already carry the Montgomery conversion factor.
#[macro_export]
macro_rules! field_new {
    ($name:ty, $($arg:expr),* $(,)?) => {
        <$name>::new($($arg),*)
    };
}

/// Derives the by-value and by-reference arithmetic operator impls from the
/// `*Assign<&Self>` implementations every field model provides.
macro_rules! impl_ops_from_ref {
    ($type:ident, $params:ident) => {
        impl<P: $params> std::ops::Add<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn add(mut self, other: Self) -> Self {
                self += &other;
                self
            }
        }

        impl<'a, P: $params> std::ops::Add<&'a $type<P>> for $type<P> {
            type Output = Self;

            #[inline]
            fn add(mut self, other: &Self) -> Self {
                self += other;
                self
            }
        }

        impl<P: $params> std::ops::Sub<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn sub(mut self, other: Self) -> Self {
                self -= &other;
                self
            }
        }

        impl<'a, P: $params> std::ops::Sub<&'a $type<P>> for $type<P> {
            type Output = Self;

            #[inline]
            fn sub(mut self, other: &Self) -> Self {
                self -= other;
                self
            }
        }

        impl<P: $params> std::ops::Mul<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn mul(mut self, other: Self) -> Self {
                self *= &other;
                self
            }
        }

        impl<'a, P: $params> std::ops::Mul<&'a $type<P>> for $type<P> {
            type Output = Self;

            #[inline]
            fn mul(mut self, other: &Self) -> Self {
                self *= other;
                self
            }
        }

        impl<P: $params> std::ops::Div<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn div(mut self, other: Self) -> Self {
                self /= &other;
                self
            }
        }

        impl<'a, P: $params> std::ops::Div<&'a $type<P>> for $type<P> {
            type Output = Self;

            #[inline]
            fn div(mut self, other: &Self) -> Self {
                self /= other;
                self
            }
        }

        impl<P: $params> std::ops::AddAssign<Self> for $type<P> {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                *self += &other;
            }
        }

        impl<P: $params> std::ops::SubAssign<Self> for $type<P> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                *self -= &other;
            }
        }

        impl<P: $params> std::ops::MulAssign<Self> for $type<P> {
            #[inline]
            fn mul_assign(&mut self, other: Self) {
                *self *= &other;
            }
        }

        impl<P: $params> std::ops::DivAssign<Self> for $type<P> {
            #[inline]
            fn div_assign(&mut self, other: Self) {
                *self /= &other;
            }
        }

        impl<'a, P: $params> std::ops::DivAssign<&'a Self> for $type<P> {
            #[inline]
            fn div_assign(&mut self, other: &Self) {
                *self *= &other.inverse().unwrap();
            }
        }
    };
}
