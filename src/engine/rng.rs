// ==========================================
// 双人周菜单规划系统 - 随机源
// ==========================================
// 职责: 为评分抖动与 softmax 抽样提供可注入的随机源
// 红线: 生产走熵源,测试必须可固定种子复现
// ==========================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==========================================
// PlannerRng - 规划随机源
// ==========================================
#[derive(Debug, Clone)]
pub struct PlannerRng {
    inner: StdRng,
}

impl PlannerRng {
    /// 从系统熵源创建 (生产用)
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// 从固定种子创建 (测试用,结果可复现)
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// 在 [low, high) 区间内均匀抽样
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.inner.gen_range(low..high)
    }

    /// 在 [0, 1) 区间内均匀抽样
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
