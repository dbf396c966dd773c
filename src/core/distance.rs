//! 레벤슈타인 편집 거리

/// 두 문자열의 편집 거리 (삽입/삭제/치환 비용 1)
///
/// 바이트가 아닌 문자 단위로 계산합니다.
///
/// ```
/// use koguard::core::distance::levenshtein_distance;
/// assert_eq!(levenshtein_distance("시발", "시벌"), 1);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// 문자 슬라이스 간 편집 거리
///
/// 전체 DP 행렬을 사용 (O(|a|·|b|) 시간/공간).
/// 길이 차이로 인한 조기 종료는 없으므로 호출 측에서 후보를 걸러야 합니다.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut dp = vec![vec![0usize; cols]; rows];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[a.len()][b.len()]
}

/// 허용치 제한 편집 거리 계산기
///
/// 두 행만 유지하며 버퍼를 호출 간에 재사용합니다.
/// 어떤 행의 최솟값이 허용치를 넘으면 즉시 중단합니다.
#[derive(Debug, Default)]
pub(crate) struct BoundedLevenshtein {
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl BoundedLevenshtein {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 거리가 `threshold` 이하이면 그 거리, 아니면 None
    pub(crate) fn within(&mut self, a: &[char], b: &[char], threshold: usize) -> Option<usize> {
        if a.len().abs_diff(b.len()) > threshold {
            return None;
        }

        self.prev.clear();
        self.prev.extend(0..=b.len());
        self.curr.clear();
        self.curr.resize(b.len() + 1, 0);

        for (i, &ca) in a.iter().enumerate() {
            self.curr[0] = i + 1;
            let mut row_min = self.curr[0];
            for (j, &cb) in b.iter().enumerate() {
                let cost = usize::from(ca != cb);
                let value = (self.prev[j + 1] + 1)
                    .min(self.curr[j] + 1)
                    .min(self.prev[j] + cost);
                self.curr[j + 1] = value;
                row_min = row_min.min(value);
            }
            // 이후 행의 값은 이 행의 최솟값보다 작아지지 않음
            if row_min > threshold {
                return None;
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        let distance = self.prev[b.len()];
        (distance <= threshold).then_some(distance)
    }
}
