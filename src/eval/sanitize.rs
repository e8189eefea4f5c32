//! Display-glyph normalization.

/// Replace the display-only multiplication and division glyphs with their
/// computable ASCII equivalents. Identity on all other characters.
pub fn sanitize_expression(expr: &str) -> String {
    expr.replace('×', "*").replace('÷', "/")
}
