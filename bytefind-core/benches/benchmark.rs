use tiny_bench::*;

use bytefind_core::search::{find_byte, find_in_haystack, positions};

pub fn main() {
    let input = b"MemTotal:       16314980 kB
MemFree:          445304 kB
MemAvailable:   10723148 kB
Buffers:          281968 kB
Cached:          9769372 kB
SwapCached:           28 kB
Active:          3568124 kB
Inactive:       11113988 kB
SwapTotal:      33538044 kB
SwapFree:       33536252 kB
Dirty:             26704 kB
Writeback:             0 kB
DirectMap4k:      652008 kB
DirectMap2M:    13957120 kB
DirectMap1G:     2097152 kB";
    bench_labeled("find byte early", || {
        find_byte(black_box(b':'), black_box(input))
    });
    bench_labeled("find byte absent", || {
        find_byte(black_box(b'#'), black_box(input))
    });
    let zeroes = [0u8; 4096];
    bench_labeled("find byte absent 4k", || {
        find_byte(black_box(1), black_box(&zeroes))
    });
    bench_labeled("find needle late", || {
        find_in_haystack(black_box(input), black_box(b"DirectMap1G"))
    });
    bench_labeled("collect newlines", || {
        positions::<32>(black_box(b'\n'), black_box(input))
    });
}
