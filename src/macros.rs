/// Implements the `std::ops` arithmetic traits component-wise for a vector
/// struct whose fields are all `f64`.
macro_rules! impl_vector_ops {
    ($V:ident { $($c:ident),+ }) => {
        impl_vector_ops!(@binary $V { $($c),+ } Add add AddAssign add_assign +);
        impl_vector_ops!(@binary $V { $($c),+ } Sub sub SubAssign sub_assign -);
        impl_vector_ops!(@binary $V { $($c),+ } Mul mul MulAssign mul_assign *);
        impl_vector_ops!(@binary $V { $($c),+ } Div div DivAssign div_assign /);

        impl std::ops::Add<$V> for f64 {
            type Output = $V;

            fn add(self, rhs: $V) -> $V {
                $V { $($c: self + rhs.$c),+ }
            }
        }

        impl std::ops::Neg for $V {
            type Output = $V;

            fn neg(self) -> $V {
                $V { $($c: -self.$c),+ }
            }
        }
    };

    (@binary $V:ident { $($c:ident),+ }
        $Op:ident $op:ident $OpAssign:ident $op_assign:ident $sym:tt) => {
        impl std::ops::$Op for $V {
            type Output = $V;

            fn $op(self, rhs: $V) -> $V {
                $V { $($c: self.$c $sym rhs.$c),+ }
            }
        }

        impl std::ops::$Op<f64> for $V {
            type Output = $V;

            fn $op(self, rhs: f64) -> $V {
                $V { $($c: self.$c $sym rhs),+ }
            }
        }

        impl std::ops::$OpAssign for $V {
            fn $op_assign(&mut self, rhs: $V) {
                *self = std::ops::$Op::$op(*self, rhs);
            }
        }

        impl std::ops::$OpAssign<f64> for $V {
            fn $op_assign(&mut self, rhs: f64) {
                *self = std::ops::$Op::$op(*self, rhs);
            }
        }
    };
}
