// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Aggregate functions. Every `If` variant is its own row taking exactly one
//! more argument than its base aggregate: the trailing filter predicate.

aggregates! {
	// standard aggregate functions
	"count" (0, 1),
	"countIf" (1, 2),
	"min" (1, 1),
	"minIf" (2, 2),
	"max" (1, 1),
	"maxIf" (2, 2),
	"sum" (1, 1),
	"sumIf" (2, 2),
	"avg" (1, 1),
	"avgIf" (2, 2),
	"any" (1, 1),
	"anyIf" (2, 2),
	"stddevPop" (1, 1),
	"stddevPopIf" (2, 2),
	"stddevSamp" (1, 1),
	"stddevSampIf" (2, 2),
	"varPop" (1, 1),
	"varPopIf" (2, 2),
	"varSamp" (1, 1),
	"varSampIf" (2, 2),
	"covarPop" (1, 1),
	"covarPopIf" (2, 2),
	"covarSamp" (1, 1),
	"covarSampIf" (2, 2),
	// clickhouse-specific aggregate functions
	"anyHeavy" (1, 1),
	"anyHeavyIf" (2, 2),
	"anyLast" (1, 1),
	"anyLastIf" (2, 2),
	"argMin" (2, 2),
	"argMinIf" (3, 3),
	"argMax" (2, 2),
	"argMaxIf" (3, 3),
	"argMinMerge" (1, 1),
	"avgWeighted" (2, 2),
	"avgWeightedIf" (3, 3),
	"groupArray" (1, 1),
	"groupUniqArray" (1, 1),
	"groupArrayInsertAt" (2, 2),
	"groupArrayInsertAtIf" (3, 3),
	"groupArrayMovingAvg" (1, 1),
	"groupArrayMovingAvgIf" (2, 2),
	"groupArrayMovingSum" (1, 1),
	"groupArrayMovingSumIf" (2, 2),
	"groupBitAnd" (1, 1),
	"groupBitAndIf" (2, 2),
	"groupBitOr" (1, 1),
	"groupBitOrIf" (2, 2),
	"groupBitXor" (1, 1),
	"groupBitXorIf" (2, 2),
	"groupBitmap" (1, 1),
	"groupBitmapIf" (2, 2),
	"groupBitmapAnd" (1, 1),
	"groupBitmapAndIf" (2, 2),
	"groupBitmapOr" (1, 1),
	"groupBitmapOrIf" (2, 2),
	"groupBitmapXor" (1, 1),
	"groupBitmapXorIf" (2, 2),
	"sumWithOverflow" (1, 1),
	"sumWithOverflowIf" (2, 2),
	"deltaSum" (1, 1),
	"deltaSumIf" (2, 2),
	"deltaSumTimestamp" (2, 2),
	"deltaSumTimestampIf" (3, 3),
	"sumMap" (1, 2),
	"sumMapIf" (2, 3),
	"minMap" (1, 2),
	"minMapIf" (2, 3),
	"maxMap" (1, 2),
	"maxMapIf" (2, 3),
	"skewSamp" (1, 1),
	"skewSampIf" (2, 2),
	"skewPop" (1, 1),
	"skewPopIf" (2, 2),
	"kurtSamp" (1, 1),
	"kurtSampIf" (2, 2),
	"kurtPop" (1, 1),
	"kurtPopIf" (2, 2),
	"uniq" (1, _),
	"uniqIf" (2, _),
	"uniqExact" (1, _),
	"uniqExactIf" (2, _),
	"uniqHLL12" (1, _),
	"uniqHLL12If" (2, _),
	"uniqTheta" (1, _),
	"uniqThetaIf" (2, _),
	"median" (1, 1),
	"medianIf" (2, 2),
	"medianExact" (1, 1),
	"medianExactIf" (2, 2),
	"medianExactLow" (1, 1),
	"medianExactLowIf" (2, 2),
	"medianExactHigh" (1, 1),
	"medianExactHighIf" (2, 2),
	"medianExactWeighted" (1, 1),
	"medianExactWeightedIf" (2, 2),
	"medianTiming" (1, 1),
	"medianTimingIf" (2, 2),
	"medianTimingWeighted" (1, 1),
	"medianTimingWeightedIf" (2, 2),
	"medianDeterministic" (1, 1),
	"medianDeterministicIf" (2, 2),
	"medianTDigest" (1, 1),
	"medianTDigestIf" (2, 2),
	"medianTDigestWeighted" (1, 1),
	"medianTDigestWeightedIf" (2, 2),
	"medianBFloat16" (1, 1),
	"medianBFloat16If" (2, 2),
	"simpleLinearRegression" (2, 2),
	"simpleLinearRegressionIf" (3, 3),
	"contingency" (2, 2),
	"contingencyIf" (3, 3),
	"cramersV" (2, 2),
	"cramersVIf" (3, 3),
	"cramersVBiasCorrected" (2, 2),
	"cramersVBiasCorrectedIf" (3, 3),
	"theilsU" (2, 2),
	"theilsUIf" (3, 3),
	"maxIntersections" (2, 2),
	"maxIntersectionsIf" (3, 3),
	"maxIntersectionsPosition" (2, 2),
	"maxIntersectionsPositionIf" (3, 3),
}
