/// Implements `Intersection<$rhs> for $lhs` by swapping the operands and
/// forwarding to `Intersection<$lhs> for $rhs`.
macro_rules! impl_mirrored_intersection {
    () => {};

    (
        impl Intersection<$rhs:ty> for $lhs:ty;
        $($remainder:tt)*
    ) => {
        impl $crate::Intersection<$rhs> for $lhs {
            fn intersection(&self, other: &$rhs) -> Option<$crate::Geometry> {
                $crate::Intersection::<$lhs>::intersection(other, self)
            }
        }
        impl_mirrored_intersection! { $($remainder)* }
    };
}

/// Implements `Intersects<$rhs> for $lhs` as "the intersection is not
/// nothing", so that the two can never disagree.
macro_rules! impl_intersects_via_intersection {
    () => {};

    (
        impl Intersects<$rhs:ty> for $lhs:ty;
        $($remainder:tt)*
    ) => {
        impl $crate::Intersects<$rhs> for $lhs {
            fn intersects(&self, other: &$rhs) -> bool {
                $crate::Intersection::<$rhs>::intersection(self, other).is_some()
            }
        }
        impl_intersects_via_intersection! { $($remainder)* }
    };
}

/// Implements `Intersects<Geometry>` and `Intersection<Geometry>` for a
/// primitive by dispatching on the variant of the `Geometry`.
macro_rules! impl_geometry_dispatch {
    ($($type:ty),* $(,)?) => {
        $(
            impl $crate::Intersects<$crate::Geometry> for $type {
                fn intersects(&self, other: &$crate::Geometry) -> bool {
                    match other {
                        $crate::Geometry::Point(g) => $crate::Intersects::intersects(self, g),
                        $crate::Geometry::Segment(g) => $crate::Intersects::intersects(self, g),
                        $crate::Geometry::Ray(g) => $crate::Intersects::intersects(self, g),
                        $crate::Geometry::Line(g) => $crate::Intersects::intersects(self, g),
                    }
                }
            }
            impl $crate::Intersection<$crate::Geometry> for $type {
                fn intersection(&self, other: &$crate::Geometry) -> Option<$crate::Geometry> {
                    match other {
                        $crate::Geometry::Point(g) => $crate::Intersection::intersection(self, g),
                        $crate::Geometry::Segment(g) => $crate::Intersection::intersection(self, g),
                        $crate::Geometry::Ray(g) => $crate::Intersection::intersection(self, g),
                        $crate::Geometry::Line(g) => $crate::Intersection::intersection(self, g),
                    }
                }
            }
        )*
    };
}
