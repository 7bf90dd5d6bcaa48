//! Generation statistics.

use web_time::Instant;

use crate::types::Mesh;

/// Totals accumulated while building one or more meshes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
  pub meshes: usize,
  pub vertices: usize,
  pub indices: usize,
  /// Wall time spent generating, in microseconds.
  pub elapsed_us: u64,
}

impl GenerationStats {
  /// Count one finished mesh.
  pub fn record(&mut self, mesh: &Mesh) {
    self.meshes += 1;
    self.vertices += mesh.vertices.len();
    self.indices += mesh.indices.len();
  }

  /// Add the time elapsed since `start`.
  pub fn finish(&mut self, start: Instant) {
    self.elapsed_us += start.elapsed().as_micros() as u64;
  }

  pub fn triangles(&self) -> usize {
    self.indices / 3
  }

  pub fn elapsed_ms(&self) -> f64 {
    self.elapsed_us as f64 / 1000.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Vertex;

  #[test]
  fn record_accumulates_counts() {
    let mut mesh = Mesh::new();
    for _ in 0..4 {
      mesh.push_vertex(Vertex::default());
    }
    mesh.indices = vec![0, 2, 1, 1, 2, 3];

    let mut stats = GenerationStats::default();
    stats.record(&mesh);
    stats.record(&mesh);

    assert_eq!(stats.meshes, 2);
    assert_eq!(stats.vertices, 8);
    assert_eq!(stats.indices, 12);
    assert_eq!(stats.triangles(), 4);
  }

  #[test]
  fn finish_adds_elapsed_time() {
    let mut stats = GenerationStats {
      elapsed_us: 5,
      ..Default::default()
    };
    stats.finish(Instant::now());
    assert!(stats.elapsed_us >= 5);
    assert!(stats.elapsed_ms() >= 0.005);
  }
}
