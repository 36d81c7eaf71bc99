/// Screen cell coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// On-screen rectangle; never extends past the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        !self.is_empty()
            && p.x >= self.x
            && p.x < self.right()
            && p.y >= self.y
            && p.y < self.bottom()
    }

    pub fn to_layout(self) -> LayoutRect {
        LayoutRect::new(self.x as i32, self.y as i32, self.w, self.h)
    }
}

/// Rectangle in signed layout space.
///
/// Translated content (the card strip, sliding buttons) is laid out here and may
/// start left of the screen; it is clipped back to a [`Rect`] before painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutRect {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
}

impl LayoutRect {
    pub const fn new(x: i32, y: i32, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The visible part of `self` inside `clip`.
    pub fn clip(self, clip: Rect) -> Rect {
        let x1 = self.x.max(clip.x as i32);
        let y1 = self.y.max(clip.y as i32);
        let x2 = self.right().min(clip.right() as i32);
        let y2 = self.bottom().min(clip.bottom() as i32);
        if x2 <= x1 || y2 <= y1 {
            return Rect::new(clip.x, clip.y, 0, 0);
        }
        Rect::new(x1 as u16, y1 as u16, (x2 - x1) as u16, (y2 - y1) as u16)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
