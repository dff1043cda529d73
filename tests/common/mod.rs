// Fakes shared by the host-side tests: a surface that records draw calls and
// a scheduler that hands out sequential tokens.

#![allow(dead_code)]

use dotgrid_core::{FrameScheduler, FrameToken, Surface, Viewport};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Begin(f32),
    End,
    Fill(String, f32),
    Circle(Vec2, f32),
    Square(Vec2, f32),
    Cross(Vec2, f32, f32),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub size: (u32, u32),
    pub ops: Vec<Op>,
    pub resizes: usize,
}

impl RecordingSurface {
    pub fn shape_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Circle(..) | Op::Square(..) | Op::Cross(..)))
            .count()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle(c, r) => Some((*c, *r)),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(String, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(c, a) => Some((c.clone(), *a)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn buffer_size(&self) -> (u32, u32) {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport.device_size();
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(Op::Clear);
    }

    fn begin_frame(&mut self, dpr: f32) {
        self.ops.push(Op::Begin(dpr));
    }

    fn end_frame(&mut self) {
        self.ops.push(Op::End);
    }

    fn set_fill(&mut self, color: &str, alpha: f32) {
        self.ops.push(Op::Fill(color.to_string(), alpha));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(Op::Circle(center, radius));
    }

    fn fill_square(&mut self, center: Vec2, side: f32) {
        self.ops.push(Op::Square(center, side));
    }

    fn fill_cross(&mut self, center: Vec2, length: f32, thickness: f32) {
        self.ops.push(Op::Cross(center, length, thickness));
    }
}

#[derive(Debug, Default)]
pub struct FakeScheduler {
    next: i32,
    pub requested: Vec<FrameToken>,
    pub cancelled: Vec<FrameToken>,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next += 1;
        let token = FrameToken(self.next);
        self.requested.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.cancelled.push(token);
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
