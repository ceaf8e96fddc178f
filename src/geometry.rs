use embedded_graphics::{prelude::*, primitives::Rectangle};

/// Returns a rectangle of `content`'s size centered inside `container`.
///
/// Offsets use integer division, so odd size differences leave the extra pixel on the bottom
/// right. Content larger than the container gets a negative offset and overhangs both sides.
pub fn center(container: &Rectangle, content: Size) -> Rectangle {
    let dx = (container.size.width as i32 - content.width as i32) / 2;
    let dy = (container.size.height as i32 - content.height as i32) / 2;
    Rectangle::new(container.top_left + Point::new(dx, dy), content)
}
