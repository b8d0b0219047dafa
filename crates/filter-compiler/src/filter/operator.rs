use connectors::grpc::filter::filters::Operator as GrpcOperator;
use model::{Combinator, Operator};

/// Any operator that can appear on a filter node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireOperator {
    Comparison(Operator),
    Composite(Combinator),
}

impl WireOperator {
    pub const ALL: [WireOperator; 13] = [
        WireOperator::Comparison(Operator::Equal),
        WireOperator::Comparison(Operator::NotEqual),
        WireOperator::Comparison(Operator::GreaterThan),
        WireOperator::Comparison(Operator::GreaterThanEqual),
        WireOperator::Comparison(Operator::LessThan),
        WireOperator::Comparison(Operator::LessThanEqual),
        WireOperator::Comparison(Operator::Like),
        WireOperator::Comparison(Operator::IsNull),
        WireOperator::Comparison(Operator::ContainsAny),
        WireOperator::Comparison(Operator::ContainsAll),
        WireOperator::Comparison(Operator::WithinGeoRange),
        WireOperator::Composite(Combinator::And),
        WireOperator::Composite(Combinator::Or),
    ];

    /// Binary enum and document name for every operator. Both compilers
    /// read from here and nowhere else.
    const fn entry(self) -> (GrpcOperator, &'static str) {
        match self {
            WireOperator::Comparison(operator) => match operator {
                Operator::Equal => (GrpcOperator::Equal, "Equal"),
                Operator::NotEqual => (GrpcOperator::NotEqual, "NotEqual"),
                Operator::GreaterThan => (GrpcOperator::GreaterThan, "GreaterThan"),
                Operator::GreaterThanEqual => (GrpcOperator::GreaterThanEqual, "GreaterThanEqual"),
                Operator::LessThan => (GrpcOperator::LessThan, "LessThan"),
                Operator::LessThanEqual => (GrpcOperator::LessThanEqual, "LessThanEqual"),
                Operator::Like => (GrpcOperator::Like, "Like"),
                Operator::IsNull => (GrpcOperator::IsNull, "IsNull"),
                Operator::ContainsAny => (GrpcOperator::ContainsAny, "ContainsAny"),
                Operator::ContainsAll => (GrpcOperator::ContainsAll, "ContainsAll"),
                Operator::WithinGeoRange => (GrpcOperator::WithinGeoRange, "WithinGeoRange"),
            },
            WireOperator::Composite(combinator) => match combinator {
                Combinator::And => (GrpcOperator::And, "And"),
                Combinator::Or => (GrpcOperator::Or, "Or"),
            },
        }
    }

    pub const fn grpc(self) -> GrpcOperator {
        self.entry().0
    }

    pub const fn name(self) -> &'static str {
        self.entry().1
    }
}

impl From<Operator> for WireOperator {
    fn from(operator: Operator) -> Self {
        WireOperator::Comparison(operator)
    }
}

impl From<Combinator> for WireOperator {
    fn from(combinator: Combinator) -> Self {
        WireOperator::Composite(combinator)
    }
}
