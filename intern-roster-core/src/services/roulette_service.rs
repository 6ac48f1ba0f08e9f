//! Coffee Roulette 抽取服务

use rand::Rng;

use intern_roster_client::Intern;

use crate::error::{CoreError, CoreResult};

/// 随机源抽象
///
/// 让调用方（和测试）注入确定性的实现；生产环境用 [`ThreadRngSource`]。
pub trait RandomSource: Send {
    /// 返回 `[0, len)` 内的一个索引，调用方保证 `len > 0`
    fn pick_index(&mut self, len: usize) -> usize;
}

/// 生产实现：每次调用都做一次新的均匀抽取
///
/// 不播种、不加权，重复抽取允许抽到同一个人。
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Coffee Roulette 服务
///
/// 从当前花名册缓存中均匀抽取一名实习生。
pub struct RouletteService {
    source: Box<dyn RandomSource>,
}

impl RouletteService {
    /// 用给定随机源创建服务
    #[must_use]
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// 用线程 RNG 创建服务（生产默认）
    #[must_use]
    pub fn with_thread_rng() -> Self {
        Self::new(Box::new(ThreadRngSource))
    }

    /// 抽取一名实习生
    ///
    /// 空花名册返回 [`CoreError::EmptyRoster`]，由 UI 决定如何提示。
    pub fn pick<'a>(&mut self, roster: &'a [Intern]) -> CoreResult<&'a Intern> {
        if roster.is_empty() {
            return Err(CoreError::EmptyRoster);
        }
        let index = self.source.pick_index(roster.len());
        Ok(&roster[index])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_possible_wrap)]
mod tests {
    use super::*;

    fn roster_of(names: &[&str]) -> Vec<Intern> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Intern {
                id: Some(i as i64 + 1),
                name: (*name).to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                department: "Engineering".to_string(),
            })
            .collect()
    }

    /// 固定序列随机源（测试用）
    struct SeqSource {
        indices: Vec<usize>,
        cursor: usize,
    }

    impl RandomSource for SeqSource {
        fn pick_index(&mut self, len: usize) -> usize {
            let index = self.indices[self.cursor % self.indices.len()];
            self.cursor += 1;
            index % len
        }
    }

    #[test]
    fn empty_roster_is_an_error() {
        let mut roulette = RouletteService::with_thread_rng();
        let result = roulette.pick(&[]);
        assert!(matches!(result, Err(CoreError::EmptyRoster)));
    }

    #[test]
    fn pick_follows_the_injected_source() {
        let roster = roster_of(&["Ana", "Bo", "Cleo"]);
        let mut roulette = RouletteService::new(Box::new(SeqSource {
            indices: vec![2, 0],
            cursor: 0,
        }));
        assert_eq!(roulette.pick(&roster).unwrap().name, "Cleo");
        assert_eq!(roulette.pick(&roster).unwrap().name, "Ana");
    }

    #[test]
    fn repeat_picks_may_return_the_same_intern() {
        let roster = roster_of(&["Ana", "Bo"]);
        let mut roulette = RouletteService::new(Box::new(SeqSource {
            indices: vec![1, 1],
            cursor: 0,
        }));
        let first = roulette.pick(&roster).unwrap().clone();
        let second = roulette.pick(&roster).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn thread_rng_picks_a_member_of_the_roster() {
        let roster = roster_of(&["Ana", "Bo", "Cleo", "Dev"]);
        let mut roulette = RouletteService::with_thread_rng();
        for _ in 0..100 {
            let picked = roulette.pick(&roster).unwrap();
            assert!(roster.contains(picked));
        }
    }
}
