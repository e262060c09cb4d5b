/// A value that can be rendered as the textual answer to a case.
///
/// A case answer is either a scalar, rendered through its plain text representation, or an ordered
/// sequence of scalars, rendered as the space-joined text of its elements. Which of the two a
/// solver produces is fixed by its [`crate::Solver::Answer`] type.
pub trait Render {
    /// Produce the textual form of this answer.
    fn render(&self) -> String;
}

macro_rules! impl_render_scalar {
    ($($t:ty,)*) => {
        $(
            impl Render for $t {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    }
}

impl_render_scalar! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    bool, char,
    String,
}

impl Render for &str {
    fn render(&self) -> String {
        (*self).to_owned()
    }
}

fn join<T: Render>(elements: &[T]) -> String {
    elements
        .iter()
        .map(Render::render)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        join(self)
    }
}

impl<T: Render> Render for &[T] {
    fn render(&self) -> String {
        join(self)
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self) -> String {
        join(self)
    }
}

#[test]
fn test_render_scalars() {
    assert_eq!(42u64.render(), "42");
    assert_eq!((-7i32).render(), "-7");
    assert_eq!(true.render(), "true");
    assert_eq!("already text".render(), "already text");
}

#[test]
fn test_render_sequences() {
    assert_eq!(vec![1, 2, 3].render(), "1 2 3");
    assert_eq!([10u8, 20].render(), "10 20");
    assert_eq!(Vec::<u32>::new().render(), "");
}
