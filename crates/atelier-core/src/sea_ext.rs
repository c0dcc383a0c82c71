use sea_orm::{
    EntityTrait, Order, QueryOrder, QuerySelect, Select,
    sea_query::{Func, SimpleExpr},
};

/// Random ordering for `Select` queries (`ORDER BY RANDOM()`).
pub trait OrderByRandom: Sized {
    fn order_by_random(self) -> Self;

    /// Random sample of at most `count` rows.
    fn sample(self, count: u64) -> Self;
}

impl<E> OrderByRandom for Select<E>
where
    E: EntityTrait,
{
    fn order_by_random(mut self) -> Self {
        QueryOrder::query(&mut self)
            .order_by_expr(SimpleExpr::FunctionCall(Func::random()), Order::Asc);
        self
    }

    fn sample(self, count: u64) -> Self {
        self.order_by_random().limit(count)
    }
}
