/// Colored terminal output for matrices and points
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Point3};
use std::io::Write;

/// Writes matrices row by row with aligned, colored entries
pub struct MatrixPrinter {
    precision: usize,
}

impl MatrixPrinter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn cell(&self, value: f32) -> String {
        let width = self.precision + 5;
        format!("{:>width$.prec$}", value, width = width, prec = self.precision)
    }

    /// Entry color: red for NaN/Inf, dim for exact zeros.
    fn color(value: f32) -> Color {
        if !value.is_finite() {
            Color::Red
        } else if value == 0.0 {
            Color::DarkGrey
        } else {
            Color::White
        }
    }

    fn heading<W: Write>(writer: &mut W, title: &str) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Yellow))?;
        writer.queue(Print(format!("{title}\n")))?;
        writer.queue(ResetColor)?;
        Ok(())
    }

    pub fn write_matrix<W: Write>(
        &self,
        writer: &mut W,
        title: &str,
        m: &Matrix4<f32>,
    ) -> std::io::Result<()> {
        Self::heading(writer, title)?;
        for row in m.row_iter() {
            writer.queue(Print("  ["))?;
            for value in row.iter() {
                writer.queue(SetForegroundColor(Self::color(*value)))?;
                writer.queue(Print(self.cell(*value)))?;
            }
            writer.queue(ResetColor)?;
            writer.queue(Print(" ]\n"))?;
        }
        writer.flush()
    }

    pub fn write_point<W: Write>(
        &self,
        writer: &mut W,
        title: &str,
        p: &Point3<f32>,
    ) -> std::io::Result<()> {
        Self::heading(writer, title)?;
        writer.queue(Print("  ("))?;
        for value in p.iter() {
            writer.queue(SetForegroundColor(Self::color(*value)))?;
            writer.queue(Print(self.cell(*value)))?;
        }
        writer.queue(ResetColor)?;
        writer.queue(Print(" )\n"))?;
        writer.flush()
    }
}
