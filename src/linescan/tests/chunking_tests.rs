// linescan/tests/chunking_tests.rs

use linescan::{BlockSize, ChunkedSource, LineCollector, ScanError, Scanner};
use rstest::rstest;

fn scan_with(
    input: &str,
    block: BlockSize,
    collector: &mut LineCollector,
) -> Result<(), ScanError> {
    let source = ChunkedSource::new(input, block);
    Scanner::new().scan(source, "dummy", collector)
}

fn outcome(
    input: &str,
    block: BlockSize,
    mut collector: LineCollector,
) -> (Vec<String>, Option<String>) {
    let result = scan_with(input, block, &mut collector);
    (collector.into_lines(), result.err().map(|e| e.to_string()))
}

/// Deterministic pseudo-random chunk lengths between 1 and 7.
fn partition(seed: u64, count: usize) -> Vec<usize> {
    let mut state = seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 7) as usize + 1
        })
        .collect()
}

#[rstest]
#[case("", &[])]
#[case("a", &["a"])]
#[case("a c", &["a c"])]
#[case(" a c ", &["a c"])]
#[case("\ta c ", &["a c"])]
#[case("abc\n", &["abc"])]
#[case("abc\nd f", &["abc", "d f"])]
#[case("\n abc \n def \n\n", &["abc", "def"])]
fn basics_success(
    #[case] input: &str,
    #[case] expected: &[&str],
    #[values(
        BlockSize::Whole,
        BlockSize::Fixed(1),
        BlockSize::Fixed(2),
        BlockSize::Fixed(5),
        BlockSize::Fixed(64),
        BlockSize::Partition(vec![3, 1, 4, 1, 5, 9, 2, 6])
    )]
    block: BlockSize,
) {
    let (lines, err) = outcome(input, block, LineCollector::new());
    assert_eq!(lines, expected);
    assert_eq!(err, None);
}

#[rstest]
#[case("# nothing", &[])]
#[case("#", &[])]
#[case("##", &[])]
#[case("\n# nothing\n", &[])]
#[case("a # same line", &["a"])]
#[case("a # same line\n", &["a"])]
#[case("a\n# line\nc", &["a", "c"])]
#[case("# n o t # h i n g #", &[])]
#[case("## n o # t h i n g #", &[])]
#[case("a# n o t # h i n g #", &["a"])]
#[case("a\n## n o # t h i n g #", &["a"])]
fn drops_comments(
    #[case] input: &str,
    #[case] expected: &[&str],
    #[values(
        BlockSize::Whole,
        BlockSize::Fixed(1),
        BlockSize::Fixed(2),
        BlockSize::Fixed(5),
        BlockSize::Fixed(64),
        BlockSize::Partition(vec![2, 7, 1, 8])
    )]
    block: BlockSize,
) {
    let (lines, err) = outcome(input, block, LineCollector::new());
    assert_eq!(lines, expected);
    assert_eq!(err, None);
}

#[rstest]
#[case("a\nb\nc", "a", 1)]
#[case("a\nb\nc", "b", 2)]
#[case("a\nb\nc", "c", 3)]
#[case("a\nb\nc\n", "c", 3)]
#[case("# header\n\n  a\n# b\nb # tail", "b", 5)]
fn rejects_lines(
    #[case] input: &str,
    #[case] reject: &str,
    #[case] line: usize,
    #[values(
        BlockSize::Whole,
        BlockSize::Fixed(1),
        BlockSize::Fixed(2),
        BlockSize::Fixed(5),
        BlockSize::Fixed(64)
    )]
    block: BlockSize,
) {
    let (_, err) = outcome(input, block, LineCollector::new().rejecting(reject));
    assert_eq!(
        err,
        Some(format!("error: dummy Line {}, Rejected '{}'", line, reject))
    );
}

#[rstest]
#[case("a\nb\nc", "a", 1)]
#[case("a\nb\nc", "b", 2)]
#[case("a\nb\nc", "c", 3)]
#[case("a\nb\nc\n", "c", 3)]
fn rejects_lines_without_message(
    #[case] input: &str,
    #[case] reject: &str,
    #[case] line: usize,
    #[values(
        BlockSize::Whole,
        BlockSize::Fixed(1),
        BlockSize::Fixed(2),
        BlockSize::Fixed(5),
        BlockSize::Fixed(64)
    )]
    block: BlockSize,
) {
    let (_, err) = outcome(input, block, LineCollector::new().rejecting_silently(reject));
    assert_eq!(
        err,
        Some(format!(
            "error: dummy Line {}, ConsumeLine failed without setting an error.",
            line
        ))
    );
}

#[rstest]
fn lines_after_rejection_are_not_delivered(
    #[values(BlockSize::Whole, BlockSize::Fixed(1), BlockSize::Fixed(3))] block: BlockSize,
) {
    let (lines, err) = outcome("a\nb\nc\nd", block, LineCollector::new().rejecting("b"));
    assert_eq!(lines, vec!["a"]);
    assert!(err.is_some());
}

#[rstest]
fn scanner_read_size_does_not_matter(#[values(1, 2, 3, 7, 4096)] read_size: usize) {
    let input = "one\n  # two\nthree # 3\n\n\tfour\t";
    let mut collector = LineCollector::new();
    Scanner::new()
        .with_read_size(read_size)
        .scan(input.as_bytes(), "dummy", &mut collector)
        .unwrap();
    assert_eq!(collector.into_lines(), vec!["one", "three", "four"]);
}

#[test]
fn random_partitions_match_whole_buffer() {
    let inputs = [
        "",
        "a",
        "abc\nd f",
        "\n abc \n def \n\n",
        "key = value # comment\n# only comment\n\t\n  other=thing  \nlast",
        "x#y\n#\n##\n a # b # c \n",
        "caf\u{e9}\n\u{1f600} smile # emoji\n",
    ];
    let rejects = ["", "a", "d f", "def", "other=thing", "last", "x", "\u{1f600} smile"];

    for input in inputs {
        for reject in rejects {
            let collector = || LineCollector::new().rejecting(reject);
            let expected = outcome(input, BlockSize::Whole, collector());
            for seed in 0..32 {
                let block = BlockSize::Partition(partition(seed, 16));
                let actual = outcome(input, block.clone(), collector());
                assert_eq!(
                    actual, expected,
                    "input {:?}, reject {:?}, partition {:?}",
                    input, reject, block
                );
            }
        }
    }
}

#[test]
fn ordinal_counts_dropped_lines() {
    let input = "\n# one\n   \n\t# two\nvalue\n";
    let mut collector = LineCollector::new().rejecting_silently("value");
    let err = Scanner::new()
        .scan_str(input, "ordinals", &mut collector)
        .unwrap_err();
    assert_eq!(err.line_number(), Some(5));
}
