// ==========================================
// 双人周菜单规划系统 - 概率选择引擎
// ==========================================
// 职责: 把带分候选集转化为带偏好权重的随机选择
// 算法: 降序取前 K, 原始分 softmax, 单次均匀抽样走累积分布
// 红线: 仅在输入为空时返回 None
// ==========================================

use crate::domain::dish::Dish;
use crate::engine::rng::PlannerRng;

// ==========================================
// ProbabilisticSelector - 概率选择引擎
// ==========================================
pub struct ProbabilisticSelector {
    // 无状态引擎,不需要注入依赖
}

impl ProbabilisticSelector {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 从带分候选集中抽取一个菜品
    ///
    /// 步骤:
    /// 1) 按分值降序排序,保留前 top_k 个
    /// 2) 对保留集的原始分做 softmax 得到概率分布
    /// 3) 抽取 [0,1) 均匀随机数,沿排序后的累积分布返回
    ///    首个累积概率覆盖抽样值的候选
    /// 4) 浮点误差导致无命中时回退到最高分候选
    ///
    /// # 参数
    /// - scored: (分值, 菜品) 列表
    /// - top_k: softmax 保留的候选数
    /// - rng: 随机源
    ///
    /// # 返回
    /// 选中的菜品;输入为空时 None
    pub fn select<'a>(
        &self,
        mut scored: Vec<(f64, &'a Dish)>,
        top_k: usize,
        rng: &mut PlannerRng,
    ) -> Option<&'a Dish> {
        if scored.is_empty() {
            return None;
        }

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(top_k.max(1));

        let total: f64 = scored.iter().map(|(score, _)| score.exp()).sum();
        let draw = rng.unit();

        let mut cumulative = 0.0;
        for (score, dish) in &scored {
            cumulative += score.exp() / total;
            if draw <= cumulative {
                return Some(*dish);
            }
        }

        // 浮点累积误差兜底: 返回最高分候选
        Some(scored[0].1)
    }
}

impl Default for ProbabilisticSelector {
    fn default() -> Self {
        Self::new()
    }
}
