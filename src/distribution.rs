use crate::{Error, Result};

/// Samples an index of `line` in proportion to its (unnormalized, non-negative) values, given a
/// uniform random number `rng` in `[0, 1)`.
///
/// `rng` is scaled by the total mass and the first index whose running sum exceeds it is
/// returned, so ties favor the lower index. Running off the end of the line (a zero or
/// non-finite total) is reported as `Error::InvalidSampleIndex`.
pub fn sample_number_line(line: &[f64], rng: f64) -> Result<usize> {
    let mut accumulated = Vec::with_capacity(line.len());
    let mut total = 0.0;
    for value in line.iter() {
        total += *value;
        accumulated.push(total);
    }

    let scaled = rng * total;
    accumulated
        .iter()
        .position(|acc| scaled < *acc)
        .ok_or(Error::InvalidSampleIndex { scaled, total })
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
