use derive_new::new;

/// One step of an edit script, by position in the compared sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Delete { old: usize },
    Insert { new: usize },
    Equal { old: usize, new: usize },
}

pub trait DiffAlgorithm {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Vec<Edit>;
}

/// Myers' greedy shortest-edit-script algorithm
///
/// Used for short sequences such as the tokens of a single line, where the
/// `O((N + M) * D)` trace is cheap.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: PartialEq> DiffAlgorithm for MyersDiff<'_, T> {
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 2];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // came from k+1: an insertion
                    v[idx + 1]
                } else {
                    // came from k-1: a deletion
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y) as usize;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if k == -d
                || (k != d
                    && v[(offset as isize + k - 1) as usize] < v[(offset as isize + k + 1) as usize])
            {
                k + 1
            } else {
                k - 1
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn diff(&self) -> Vec<Edit> {
        let mut diff = self
            .backtrack()
            .into_iter()
            .map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    Edit::Insert {
                        new: prev_y as usize,
                    }
                } else if y == prev_y {
                    Edit::Delete {
                        old: prev_x as usize,
                    }
                } else {
                    Edit::Equal {
                        old: prev_x as usize,
                        new: prev_y as usize,
                    }
                }
            })
            .collect::<Vec<_>>();

        diff.reverse();
        diff
    }
}
